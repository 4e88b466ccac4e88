use crate::ui::auth::state::AuthMode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthIntent {
    SetMode(AuthMode),
    ToggleMode,
    FocusNext,
    Input(char),
    Paste(String),
    Backspace,
    /// Clear both inputs and return to the login form.
    Clear,
}

impl Intent for AuthIntent {}
