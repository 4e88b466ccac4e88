//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of UI state (session, auth form, resume) follows the same
//! unidirectional flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: self-contained value holding everything a view needs
//! - **Intent**: user action or system event
//! - **Reducer**: the only place where a state transition happens

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
