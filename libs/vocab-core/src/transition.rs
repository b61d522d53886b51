//! Status-changing actions.
//!
//! Every action is an unconditional overwrite: the resulting status does not
//! depend on the current one, so any status can be reached from any other.

use serde::{Deserialize, Serialize};

use crate::types::Status;

/// Discrete action a learner applies to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// The learner knows the word.
    Know,
    /// The learner is not sure and wants to see it again.
    Unsure,
    /// Put the word back into the pool of new words.
    Reset,
}

impl Action {
    /// Status the word holds after the action.
    pub fn target(self) -> Status {
        match self {
            Self::Know => Status::Mastered,
            Self::Unsure => Status::Review,
            Self::Reset => Status::New,
        }
    }

    /// Whether applying the action resolves a word in a study session.
    pub fn resolves(self) -> bool {
        matches!(self, Self::Know | Self::Unsure)
    }
}

/// Status after applying `action` to a word currently in `_current`.
pub fn apply(_current: Status, action: Action) -> Status {
    action.target()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Status; 3] = [Status::New, Status::Review, Status::Mastered];

    #[test]
    fn actions_map_to_statuses() {
        assert_eq!(Action::Know.target(), Status::Mastered);
        assert_eq!(Action::Unsure.target(), Status::Review);
        assert_eq!(Action::Reset.target(), Status::New);
    }

    #[test]
    fn transitions_ignore_current_status() {
        for current in ALL {
            assert_eq!(apply(current, Action::Know), Status::Mastered);
            assert_eq!(apply(current, Action::Unsure), Status::Review);
            assert_eq!(apply(current, Action::Reset), Status::New);
        }
    }

    #[test]
    fn only_know_and_unsure_resolve() {
        assert!(Action::Know.resolves());
        assert!(Action::Unsure.resolves());
        assert!(!Action::Reset.resolves());
    }
}
