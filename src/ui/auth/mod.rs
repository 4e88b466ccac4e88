mod intent;
mod reducer;
mod state;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::{AuthField, AuthFormState, AuthMode, DEFAULT_USER_NAME};
