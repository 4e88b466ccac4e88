mod intent;
mod reducer;
mod state;

pub use intent::ResumeIntent;
pub use reducer::ResumeReducer;
pub use state::ResumeState;
