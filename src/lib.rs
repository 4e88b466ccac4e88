//! Resume builder core and terminal front end.
//!
//! The document model (`document`) is the single source of truth; editor
//! rows and the preview are projections of it (`projection`). The UI drives
//! typed mutations through MVI reducers and hands the rendered preview to an
//! export sink (`export`).

pub mod cli;
pub mod config;
pub mod document;
pub mod export;
pub mod logging;
pub mod projection;
pub mod shutdown;
pub mod ui;
