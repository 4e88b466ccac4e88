use crate::ui::mvi::UiState;

/// Name used for accounts signed in through the login form.
pub const DEFAULT_USER_NAME: &str = "User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Name,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Email => "Email",
            AuthField::Name => "Full Name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub email: String,
    pub name: String,
    pub focused: AuthField,
}

impl UiState for AuthFormState {}

impl AuthFormState {
    /// Fields shown for the current mode, in tab order.
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email],
            AuthMode::Signup => &[AuthField::Name, AuthField::Email],
        }
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Email => &self.email,
            AuthField::Name => &self.name,
        }
    }

    /// `(email, name)` to sign in with. The login form has no name field
    /// and signs in as [`DEFAULT_USER_NAME`].
    pub fn credentials(&self) -> (String, String) {
        let name = match self.mode {
            AuthMode::Login => DEFAULT_USER_NAME.to_string(),
            AuthMode::Signup => self.name.clone(),
        };
        (self.email.clone(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_signs_in_as_default_user() {
        let state = AuthFormState {
            email: "ada@example.com".into(),
            name: "ignored".into(),
            ..AuthFormState::default()
        };
        assert_eq!(
            state.credentials(),
            ("ada@example.com".to_string(), "User".to_string())
        );
    }

    #[test]
    fn signup_form_uses_typed_name() {
        let state = AuthFormState {
            mode: AuthMode::Signup,
            email: "ada@example.com".into(),
            name: "Ada".into(),
            focused: AuthField::Name,
        };
        assert_eq!(state.credentials().1, "Ada");
    }
}
