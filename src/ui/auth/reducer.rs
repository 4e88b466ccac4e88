use crate::ui::auth::intent::AuthIntent;
use crate::ui::auth::state::{AuthField, AuthFormState, AuthMode};
use crate::ui::mvi::Reducer;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthFormState;
    type Intent = AuthIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::SetMode(mode) => switch_mode(&mut state, mode),
            AuthIntent::ToggleMode => {
                let mode = match state.mode {
                    AuthMode::Login => AuthMode::Signup,
                    AuthMode::Signup => AuthMode::Login,
                };
                switch_mode(&mut state, mode);
            }
            AuthIntent::FocusNext => {
                let fields = state.fields();
                let current = fields
                    .iter()
                    .position(|field| *field == state.focused)
                    .unwrap_or(0);
                state.focused = fields[(current + 1) % fields.len()];
            }
            AuthIntent::Input(ch) => focused_value(&mut state).push(ch),
            AuthIntent::Paste(text) => focused_value(&mut state).push_str(&text),
            AuthIntent::Backspace => {
                focused_value(&mut state).pop();
            }
            AuthIntent::Clear => return AuthFormState::default(),
        }
        state
    }
}

fn switch_mode(state: &mut AuthFormState, mode: AuthMode) {
    state.mode = mode;
    state.focused = state.fields()[0];
}

fn focused_value(state: &mut AuthFormState) -> &mut String {
    match state.focused {
        AuthField::Email => &mut state.email,
        AuthField::Name => &mut state.name,
    }
}
