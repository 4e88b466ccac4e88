use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Auth,
    Builder,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Auth => "Sign in",
            View::Builder => "Builder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub current_view: View,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_home_without_user() {
        let state = SessionState::default();
        assert_eq!(state.current_view, View::Home);
        assert!(!state.is_logged_in());
    }
}
