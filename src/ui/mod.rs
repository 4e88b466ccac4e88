//! Terminal front end: three views (home, auth, builder) over the MVI
//! states in `session`, `auth` and `resume`.

pub mod app;
pub mod auth;
pub mod editor_panel;
pub mod events;
pub mod focus;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod preview_panel;
pub mod render;
pub mod resume;
pub mod runtime;
pub mod session;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{run, StartupLogin};
