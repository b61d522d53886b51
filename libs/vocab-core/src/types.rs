//! Core types for the vocabulary engine.

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

/// Settings key recording whether the study tutorial has been dismissed.
pub const TUTORIAL_SEEN: &str = "tutorial_seen";

/// Identifier and name of the library seeded on first initialization.
pub const DEFAULT_LIBRARY_ID: i64 = 1;
pub const DEFAULT_LIBRARY_NAME: &str = "default";

/// Word learning status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    New,
    Review,
    Mastered,
}

impl Default for Status {
    fn default() -> Self {
        Self::New
    }
}

impl Status {
    /// Statuses that make a word eligible for a study batch.
    pub const STUDYABLE: [Status; 2] = [Status::New, Status::Review];

    /// Integer code stored in the `words.status` column.
    pub fn code(self) -> i64 {
        match self {
            Self::New => 0,
            Self::Review => 1,
            Self::Mastered => 2,
        }
    }

    /// Create from a stored integer code.
    pub fn from_code(code: i64) -> Result<Self, StatusError> {
        match code {
            0 => Ok(Self::New),
            1 => Ok(Self::Review),
            2 => Ok(Self::Mastered),
            other => Err(StatusError::InvalidCode(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Review => "review",
            Self::Mastered => "mastered",
        }
    }
}

/// A named group of words with a visibility flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// Library as listed by the registry, with its total word count.
///
/// `word_count` includes every owned word, whatever its status and whether
/// or not the library is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySummary {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub word_count: usize,
}

/// An English/Chinese pair owned by one library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub english: String,
    pub chinese: String,
    pub status: Status,
    pub library_id: i64,
}

/// Result ordering for word queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOrder {
    /// Uniform shuffle.
    Random,
    /// Ascending creation order.
    Sequential,
}

impl Default for QueryOrder {
    fn default() -> Self {
        Self::Random
    }
}

/// Per-status word counts over active libraries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub new: usize,
    pub review: usize,
    pub mastered: usize,
}

impl WordStats {
    pub fn total(&self) -> usize {
        self.new + self.review + self.mastered
    }

    /// Add one word of the given status.
    pub fn record(&mut self, status: Status, count: usize) {
        match status {
            Status::New => self.new += count,
            Status::Review => self.review += count,
            Status::Mastered => self.mastered += count,
        }
    }
}

/// Mastered words against the total, for the home screen summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub mastered: usize,
    pub total: usize,
}

impl Progress {
    pub fn from_stats(stats: &WordStats, total: usize) -> Self {
        Self {
            mastered: stats.mastered,
            total,
        }
    }
}

/// Which side of a word is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    EnglishToChinese,
    ChineseToEnglish,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::EnglishToChinese
    }
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::EnglishToChinese => Self::ChineseToEnglish,
            Self::ChineseToEnglish => Self::EnglishToChinese,
        }
    }

    /// Text shown up front.
    pub fn prompt<'a>(&self, word: &'a Word) -> &'a str {
        match self {
            Self::EnglishToChinese => &word.english,
            Self::ChineseToEnglish => &word.chinese,
        }
    }

    /// Text hidden until revealed.
    pub fn answer<'a>(&self, word: &'a Word) -> &'a str {
        match self {
            Self::EnglishToChinese => &word.chinese,
            Self::ChineseToEnglish => &word.english,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word() -> Word {
        Word {
            id: 1,
            english: "cat".to_string(),
            chinese: "猫".to_string(),
            status: Status::New,
            library_id: 1,
        }
    }

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(Status::New.code(), 0);
        assert_eq!(Status::Review.code(), 1);
        assert_eq!(Status::Mastered.code(), 2);
        for status in [Status::New, Status::Review, Status::Mastered] {
            assert_eq!(Status::from_code(status.code()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_code_is_rejected() {
        assert!(matches!(
            Status::from_code(7),
            Err(StatusError::InvalidCode(7))
        ));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&Status::Mastered).unwrap();
        assert_eq!(json, "\"mastered\"");
    }

    #[test]
    fn stats_total_sums_buckets() {
        let mut stats = WordStats::default();
        stats.record(Status::New, 3);
        stats.record(Status::Mastered, 2);
        assert_eq!(stats.total(), 5);
        assert_eq!(Progress::from_stats(&stats, 5), Progress { mastered: 2, total: 5 });
    }

    #[test]
    fn view_mode_swaps_sides() {
        let w = word();
        let mode = ViewMode::default();
        assert_eq!(mode.prompt(&w), "cat");
        assert_eq!(mode.answer(&w), "猫");

        let flipped = mode.toggled();
        assert_eq!(flipped.prompt(&w), "猫");
        assert_eq!(flipped.answer(&w), "cat");
    }
}
