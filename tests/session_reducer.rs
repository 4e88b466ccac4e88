mod common;

use arsim::ui::auth::{AuthField, AuthFormState, AuthIntent, AuthMode, AuthReducer};
use arsim::ui::mvi::Reducer;
use arsim::ui::session::{SessionIntent, SessionReducer, SessionState, User, View};

#[test]
fn login_opens_builder_with_user() {
    let state = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::Login {
            email: "ada@example.com".into(),
            name: "Ada".into(),
        },
    );
    assert_eq!(state.current_view, View::Builder);
    assert_eq!(
        state.current_user,
        Some(User {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        })
    );
}

#[test]
fn logout_returns_home_without_user() {
    let logged_in = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::Login {
            email: "ada@example.com".into(),
            name: "Ada".into(),
        },
    );
    let state = SessionReducer::reduce(logged_in, SessionIntent::Logout);
    assert_eq!(state, SessionState::default());
}

#[test]
fn navigation_keeps_user() {
    let logged_in = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::Login {
            email: "ada@example.com".into(),
            name: "Ada".into(),
        },
    );
    let state = SessionReducer::reduce(logged_in, SessionIntent::NavigateTo(View::Home));
    assert_eq!(state.current_view, View::Home);
    assert!(state.is_logged_in());
}

#[test]
fn signup_form_tab_order_starts_with_name() {
    let state = AuthReducer::reduce(
        AuthFormState::default(),
        AuthIntent::SetMode(AuthMode::Signup),
    );
    assert_eq!(state.fields(), &[AuthField::Name, AuthField::Email]);

    let state = AuthReducer::reduce(state, AuthIntent::Input('A'));
    let state = AuthReducer::reduce(state, AuthIntent::FocusNext);
    let state = AuthReducer::reduce(state, AuthIntent::Paste("a@b.c".into()));
    assert_eq!(state.credentials(), ("a@b.c".to_string(), "A".to_string()));
}

#[test]
fn clear_returns_to_empty_login_form() {
    let state = AuthReducer::reduce(
        AuthFormState::default(),
        AuthIntent::SetMode(AuthMode::Signup),
    );
    let state = AuthReducer::reduce(state, AuthIntent::Input('x'));
    let state = AuthReducer::reduce(state, AuthIntent::Clear);
    assert_eq!(state, AuthFormState::default());
}
