//! Per-letter feedback classification
//!
//! The same four states describe both board tiles and keyboard keys. Variants are
//! declared in order of informativeness so the derived `Ord` matches
//! `Empty < Absent < Present < Correct`.

use std::fmt;

/// Feedback state of a tile or keyboard key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Not yet scored
    #[default]
    Empty,
    /// Letter is not in the target (or all its occurrences are already credited)
    Absent,
    /// Letter is in the target at a different position
    Present,
    /// Letter is in the target at this position
    Correct,
}

impl LetterState {
    /// True once the letter has been scored
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Single-character code: `G` correct, `Y` present, `-` absent, `.` empty
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    /// Share-grid square; unscored letters show as blank
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Empty => '⬜',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Empty => "empty",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        write!(f, "{label}")
    }
}

/// Merge a newly observed state into a keyboard key's known state
///
/// A key that is `Correct` stays `Correct`; a key that is `Present` only upgrades
/// to `Correct`. Everything else takes the new observation. For scored
/// observations this never lowers a key's informativeness.
#[must_use]
pub const fn merge_key_state(old: LetterState, new: LetterState) -> LetterState {
    match (old, new) {
        (LetterState::Correct, _) | (LetterState::Present, LetterState::Correct) => {
            LetterState::Correct
        }
        (LetterState::Present, _) => LetterState::Present,
        (_, new) => new,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [LetterState; 4] = [
        LetterState::Empty,
        LetterState::Absent,
        LetterState::Present,
        LetterState::Correct,
    ];

    #[test]
    fn informativeness_order() {
        assert!(LetterState::Empty < LetterState::Absent);
        assert!(LetterState::Absent < LetterState::Present);
        assert!(LetterState::Present < LetterState::Correct);
        assert_eq!(LetterState::default(), LetterState::Empty);
    }

    #[test]
    fn merge_keeps_correct() {
        for new in ALL {
            assert_eq!(
                merge_key_state(LetterState::Correct, new),
                LetterState::Correct
            );
        }
    }

    #[test]
    fn merge_present_only_upgrades_to_correct() {
        assert_eq!(
            merge_key_state(LetterState::Present, LetterState::Absent),
            LetterState::Present
        );
        assert_eq!(
            merge_key_state(LetterState::Present, LetterState::Correct),
            LetterState::Correct
        );
    }

    #[test]
    fn merge_of_scored_states_is_monotonic() {
        for old in ALL {
            for new in ALL.into_iter().filter(|s| s.is_scored()) {
                let merged = merge_key_state(old, new);
                assert!(merged >= old, "{old} merged with {new} gave {merged}");
                assert_eq!(merged, old.max(new));
            }
        }
    }

    #[test]
    fn codes_and_labels() {
        assert_eq!(LetterState::Correct.code(), 'G');
        assert_eq!(LetterState::Present.code(), 'Y');
        assert_eq!(LetterState::Absent.code(), '-');
        assert_eq!(LetterState::Absent.to_string(), "absent");
    }
}
