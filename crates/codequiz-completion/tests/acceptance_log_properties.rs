//! Append-only properties of the acceptance log.

use codequiz_completion::AcceptanceLog;
use codequiz_domain::SuggestionAction;
use proptest::prelude::*;

proptest! {
    /// Every recorded acceptance appears, in order, with action "accepted".
    #[test]
    fn log_preserves_acceptance_order(labels in proptest::collection::vec("[a-zA-Z0-9 ]{1,20}", 0..50)) {
        let log = AcceptanceLog::new();
        for label in &labels {
            log.record(Some(label));
        }

        let entries = log.entries();
        prop_assert_eq!(entries.len(), labels.len());
        for (entry, label) in entries.iter().zip(&labels) {
            prop_assert_eq!(&entry.label, label);
            prop_assert_eq!(entry.action, SuggestionAction::Accepted);
        }
    }

    /// The log only ever grows; recording never rewrites earlier entries.
    #[test]
    fn log_is_append_only(
        first in proptest::collection::vec("[a-z]{1,10}", 1..20),
        second in proptest::collection::vec("[a-z]{1,10}", 1..20),
    ) {
        let log = AcceptanceLog::new();
        for label in &first {
            log.record(Some(label));
        }
        let snapshot = log.entries();

        for label in &second {
            log.record(Some(label));
        }
        let grown = log.entries();

        prop_assert_eq!(grown.len(), first.len() + second.len());
        prop_assert_eq!(&grown[..snapshot.len()], &snapshot[..]);
    }
}

#[test]
fn empty_and_missing_labels_become_unknown() {
    let log = AcceptanceLog::new();
    log.record(None);
    log.record(Some(""));
    let entries = log.entries();
    assert!(entries.iter().all(|e| e.label == "unknown"));
}
