//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, pastes, form submits)
/// - Navigation events
/// - Lifecycle events (login, logout, reset)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
