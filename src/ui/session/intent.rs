use crate::ui::mvi::Intent;
use crate::ui::session::state::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIntent {
    NavigateTo(View),
    /// Simulated sign-in. Sets the user and opens the builder.
    Login { email: String, name: String },
    /// Clears the user and returns home. The caller resets the resume.
    Logout,
}

impl Intent for SessionIntent {}
