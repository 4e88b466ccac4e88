use crate::ui::mvi::Reducer;
use crate::ui::session::intent::SessionIntent;
use crate::ui::session::state::{SessionState, User, View};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::NavigateTo(view) => SessionState {
                current_view: view,
                ..state
            },
            SessionIntent::Login { email, name } => {
                tracing::info!(%email, "User logged in");
                SessionState {
                    current_user: Some(User { name, email }),
                    current_view: View::Builder,
                }
            }
            SessionIntent::Logout => {
                tracing::info!("User logged out");
                SessionState {
                    current_user: None,
                    current_view: View::Home,
                }
            }
        }
    }
}
