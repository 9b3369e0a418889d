//! Suggestion catalog lookup

use std::collections::HashMap;

use tracing::debug;

use codequiz_domain::Suggestion;

/// Maps a problem identifier to an ordered list of candidate completions,
/// falling back to a default list when no entry exists.
///
/// The fallback is documented behavior, not an error: lookup never yields
/// an empty result as long as the default list is non-empty.
#[derive(Debug, Clone)]
pub struct SuggestionCatalog {
    by_problem: HashMap<u32, Vec<Suggestion>>,
    default_list: Vec<Suggestion>,
}

impl SuggestionCatalog {
    /// Build a catalog from per-problem entries and the default list.
    pub fn new(by_problem: HashMap<u32, Vec<Suggestion>>, default_list: Vec<Suggestion>) -> Self {
        SuggestionCatalog {
            by_problem,
            default_list,
        }
    }

    /// Ordered suggestions for a problem, or the default list when the
    /// problem has no catalog entry.
    pub fn suggestions_for(&self, problem_id: u32) -> &[Suggestion] {
        match self.by_problem.get(&problem_id) {
            Some(entries) => entries,
            None => {
                debug!(problem_id, "no catalog entry, using default suggestions");
                &self.default_list
            }
        }
    }

    /// Whether the catalog carries a dedicated entry for this problem.
    pub fn has_entry(&self, problem_id: u32) -> bool {
        self.by_problem.contains_key(&problem_id)
    }

    /// The default list used for uncataloged problems.
    pub fn default_list(&self) -> &[Suggestion] {
        &self.default_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SuggestionCatalog {
        SuggestionCatalog::new(
            HashMap::from([(
                1,
                vec![
                    Suggestion::new("first", "AI Suggestion", "a"),
                    Suggestion::new("second", "AI Suggestion", "b"),
                ],
            )]),
            vec![Suggestion::new("default", "AI Suggestion", "d")],
        )
    }

    #[test]
    fn cataloged_problem_uses_its_entry_in_order() {
        let catalog = catalog();
        let labels: Vec<_> = catalog
            .suggestions_for(1)
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn uncataloged_problem_falls_back_to_default() {
        let catalog = catalog();
        let fallback = catalog.suggestions_for(999);
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].label, "default");
        assert!(!catalog.has_entry(999));
    }
}
