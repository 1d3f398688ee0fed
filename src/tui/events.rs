use crate::core::profile::ProfileId;
use crate::core::wizard::WizardStep;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
}

/// High-level actions produced by views or global keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Landing page
    NewProfile,
    EditProfile(ProfileId),
    DeleteProfile(ProfileId),

    // Wizard
    GoToStep(WizardStep),
    SubmitWizard,
    CancelWizard,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Wizard(WizardStep),
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Profiles",
            Screen::Wizard(step) => step.title(),
        }
    }

    pub fn is_wizard(self) -> bool {
        matches!(self, Screen::Wizard(_))
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_labels() {
        assert_eq!(Screen::Home.label(), "Profiles");
        assert_eq!(Screen::Wizard(WizardStep::Address).label(), "Address Information");
        assert!(Screen::Wizard(WizardStep::Review).is_wizard());
        assert!(!Screen::Home.is_wizard());
    }
}
