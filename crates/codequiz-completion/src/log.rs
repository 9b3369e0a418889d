//! Acceptance logging

use parking_lot::RwLock;
use tracing::debug;

use codequiz_domain::SuggestionLogEntry;

/// Append-only log of accepted suggestions.
///
/// One entry per acceptance, in acceptance order, stamped with the local
/// wall-clock time. No dedup and no rate limit: rapid repeated acceptance
/// of the same suggestion produces repeated rows. Entries live for the
/// session; a fresh session gets a fresh log.
#[derive(Debug, Default)]
pub struct AcceptanceLog {
    entries: RwLock<Vec<SuggestionLogEntry>>,
}

impl AcceptanceLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an acceptance. A missing or empty label is logged as
    /// `"unknown"`.
    pub fn record(&self, label: Option<&str>) {
        let entry = SuggestionLogEntry::accepted_now(label);
        debug!(label = %entry.label, "suggestion accepted");
        self.entries.write().push(entry);
    }

    /// Snapshot of all entries, oldest first.
    pub fn entries(&self) -> Vec<SuggestionLogEntry> {
        self.entries.read().clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the log is still empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
