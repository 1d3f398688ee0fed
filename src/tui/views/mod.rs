pub mod home;
pub mod wizard;

use super::events::Action;

/// Result of handing an input event to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewResult {
    /// The view handled the event itself.
    Consumed,
    /// The view wants the app to execute this action.
    Action(Action),
    /// Not handled; fall through to global keybindings.
    Ignored,
}
