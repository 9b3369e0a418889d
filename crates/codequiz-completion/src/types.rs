//! Completion item types exchanged with the host editor

use serde::{Deserialize, Serialize};

/// Command id carried by every completion item's accept side-channel.
///
/// Hosts wire this command to [`crate::AcceptanceLog::record`] (directly or
/// through the session façade) so acceptance reaches the log.
pub const ACCEPT_COMMAND_ID: &str = "ai-suggestion-accepted";

/// Cursor position within the buffer, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based column index.
    pub column: u32,
}

impl CursorPosition {
    /// Create a new cursor position.
    pub fn new(line: u32, column: u32) -> Self {
        CursorPosition { line, column }
    }
}

/// Side-channel command attached to a completion item, fired by the editor
/// when the user inserts the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptCommand {
    /// Command identifier; always [`ACCEPT_COMMAND_ID`].
    pub id: String,
    /// Human-readable command title.
    pub title: String,
    /// Label of the suggestion, passed back on acceptance.
    pub label: String,
}

impl AcceptCommand {
    /// Build the accept command for a suggestion label.
    pub fn for_label(label: impl Into<String>) -> Self {
        AcceptCommand {
            id: ACCEPT_COMMAND_ID.to_string(),
            title: "AI Suggestion Accepted".to_string(),
            label: label.into(),
        }
    }
}

/// A completion item in the shape the host editor renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Display label.
    pub label: String,
    /// Short detail tag shown next to the label.
    pub detail: String,
    /// Documentation preview: the insert text fenced as the target
    /// language.
    pub documentation: String,
    /// Snippet inserted on acceptance.
    pub insert_text: String,
    /// Sort key; catalog order is encoded as `0{index}` so the first-listed
    /// suggestion sorts first.
    pub sort_text: String,
    /// Accept side-channel command.
    pub command: AcceptCommand,
}
