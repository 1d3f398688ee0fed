//! Wizard step sequence.

use std::fmt;

/// The three pages of the profile wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    BasicInfo,
    Address,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::BasicInfo, WizardStep::Address, WizardStep::Review];
    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position, as shown in "Step N of 3".
    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Address => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::Address => "Address Information",
            WizardStep::Review => "Review & Submit",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::Address),
            WizardStep::Address => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::Address => Some(WizardStep::BasicInfo),
            WizardStep::Review => Some(WizardStep::Address),
        }
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.number(), Self::COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_sequence() {
        assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::Address));
        assert_eq!(WizardStep::Address.next(), Some(WizardStep::Review));
        assert_eq!(WizardStep::Review.next(), None);

        assert_eq!(WizardStep::Review.previous(), Some(WizardStep::Address));
        assert_eq!(WizardStep::BasicInfo.previous(), None);
    }

    #[test]
    fn test_numbers_match_position() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.number(), i + 1);
        }
        assert!(WizardStep::BasicInfo.is_first());
        assert!(WizardStep::Review.is_last());
    }

    #[test]
    fn test_display() {
        assert_eq!(WizardStep::Address.to_string(), "Step 2 of 3");
    }
}
