//! Completion provider lifecycle
//!
//! [`ProviderManager`] owns the single live completion-source registration
//! for one editor instance. Re-registering (on language switch) always
//! disposes the previous handle before installing the new one, so two
//! suggestion sources never stack.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use codequiz_domain::Suggestion;
use codequiz_storage::SuggestionCatalog;

use crate::editor::{CompletionProviderHandle, CompletionSource, EditorSurface};
use crate::types::{AcceptCommand, CompletionItem, CursorPosition};

/// Completion source backed by a fixed, ordered suggestion list.
///
/// Returns every suggestion at any cursor position, in catalog order. Each
/// item carries the label, the detail tag, a documentation preview fenced
/// as the registered language, and the accept side-channel command.
pub struct CatalogCompletionSource {
    language_id: String,
    suggestions: Vec<Suggestion>,
}

impl CatalogCompletionSource {
    /// Build a source for one language registration.
    pub fn new(language_id: impl Into<String>, suggestions: Vec<Suggestion>) -> Self {
        CatalogCompletionSource {
            language_id: language_id.into(),
            suggestions,
        }
    }

    fn to_item(&self, idx: usize, suggestion: &Suggestion) -> CompletionItem {
        CompletionItem {
            label: suggestion.label.clone(),
            detail: if suggestion.detail.is_empty() {
                "AI Suggestion".to_string()
            } else {
                suggestion.detail.clone()
            },
            documentation: format!(
                "```{}\n{}\n```",
                self.language_id, suggestion.insert_text
            ),
            insert_text: suggestion.insert_text.clone(),
            // Catalog order wins over the editor's lexical sorting.
            sort_text: format!("0{idx}"),
            command: AcceptCommand::for_label(&suggestion.label),
        }
    }
}

#[async_trait]
impl CompletionSource for CatalogCompletionSource {
    async fn provide_completions(&self, _position: CursorPosition) -> Vec<CompletionItem> {
        self.suggestions
            .iter()
            .enumerate()
            .map(|(idx, s)| self.to_item(idx, s))
            .collect()
    }
}

/// Registers and replaces the language-scoped completion source against the
/// editor, owning its disposal.
///
/// Invariant: at most one handle is live per manager. `register_for` takes
/// the previous handle out and disposes it before creating the new
/// registration; dropping the manager disposes the last handle.
pub struct ProviderManager {
    editor: Arc<dyn EditorSurface>,
    catalog: Arc<SuggestionCatalog>,
    problem_id: u32,
    active: Mutex<Option<CompletionProviderHandle>>,
}

impl ProviderManager {
    /// Create a manager for one editor instance and one problem.
    pub fn new(
        editor: Arc<dyn EditorSurface>,
        catalog: Arc<SuggestionCatalog>,
        problem_id: u32,
    ) -> Self {
        ProviderManager {
            editor,
            catalog,
            problem_id,
            active: Mutex::new(None),
        }
    }

    /// Register (or re-register) the completion source for an editor
    /// language-mode id.
    ///
    /// A missing catalog entry is not an error; the catalog falls back to
    /// its default list.
    pub fn register_for(&self, language_id: &str) {
        // Dispose before registering, never after: a panicking editor
        // adapter must not leave two live registrations behind.
        if let Some(previous) = self.active.lock().take() {
            previous.dispose();
        }

        let suggestions = self.catalog.suggestions_for(self.problem_id).to_vec();
        debug!(
            problem_id = self.problem_id,
            language_id,
            count = suggestions.len(),
            "registering completion source"
        );

        let source = Arc::new(CatalogCompletionSource::new(language_id, suggestions));
        let handle = self.editor.register_completion_source(language_id, source);
        *self.active.lock() = Some(handle);
    }

    /// Dispose the live registration, if any. Called on teardown; also runs
    /// implicitly on drop.
    pub fn dispose(&self) {
        if let Some(handle) = self.active.lock().take() {
            handle.dispose();
        }
    }

    /// Whether a registration is currently live.
    pub fn is_registered(&self) -> bool {
        self.active.lock().is_some()
    }
}

impl Drop for ProviderManager {
    fn drop(&mut self) {
        self.dispose();
    }
}
