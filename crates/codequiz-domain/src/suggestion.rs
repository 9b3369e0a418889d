//! Suggestion and acceptance-log types

use serde::{Deserialize, Serialize};

/// A single completion suggestion served to the editor.
///
/// Suggestions are immutable catalog data; ordering within a catalog entry
/// is meaningful and must be preserved all the way to the presented list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Display label shown in the suggestion dropdown.
    pub label: String,
    /// Short detail tag shown next to the label.
    pub detail: String,
    /// The snippet inserted on acceptance.
    #[serde(rename = "insertText")]
    pub insert_text: String,
}

impl Suggestion {
    /// Convenience constructor for catalog data.
    pub fn new(
        label: impl Into<String>,
        detail: impl Into<String>,
        insert_text: impl Into<String>,
    ) -> Self {
        Suggestion {
            label: label.into(),
            detail: detail.into(),
            insert_text: insert_text.into(),
        }
    }
}

/// The action recorded for a suggestion-log entry.
///
/// Only acceptance is recorded today; offers and dismissals never reach the
/// log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionAction {
    /// The user inserted the suggestion.
    Accepted,
}

/// One row of the accepted-suggestion log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionLogEntry {
    /// Wall-clock display string of when the suggestion was accepted.
    pub time: String,
    /// The action taken.
    pub action: SuggestionAction,
    /// Label of the accepted suggestion, or `"unknown"` when the accept
    /// side-channel carried no label.
    pub label: String,
}

impl SuggestionLogEntry {
    /// Build an acceptance entry stamped with the current local time.
    pub fn accepted_now(label: Option<&str>) -> Self {
        let label = match label {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => "unknown".to_string(),
        };
        SuggestionLogEntry {
            time: chrono::Local::now().format("%H:%M:%S").to_string(),
            action: SuggestionAction::Accepted,
            label,
        }
    }
}
