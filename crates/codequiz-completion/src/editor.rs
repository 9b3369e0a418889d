//! The editor capability surface
//!
//! The host editor widget is abstracted behind [`EditorSurface`]: content
//! changes flow in through the scheduler, completion sources are registered
//! through it, and the programmatic "show suggestions now" trigger flows
//! back out. Production hosts adapt their widget; tests use a fake.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::types::{CompletionItem, CursorPosition};

/// A registered handler that, given a cursor context, returns candidate
/// insertable snippets.
#[async_trait]
pub trait CompletionSource: Send + Sync {
    /// Provide the full suggestion list for the current cursor position.
    async fn provide_completions(&self, position: CursorPosition) -> Vec<CompletionItem>;
}

/// Narrow capability interface over the host editor widget.
///
/// Deliberately small: just focus querying, the programmatic suggest
/// trigger, and disposable completion-source registration. Everything else
/// the widget can do is invisible to this subsystem.
pub trait EditorSurface: Send + Sync {
    /// Whether the editor currently holds input focus.
    fn has_focus(&self) -> bool;

    /// Ask the editor to present its suggestion list, as if the user
    /// invoked "trigger suggestions" manually.
    fn trigger_suggestions(&self);

    /// Install a completion source for an editor language-mode id.
    ///
    /// The returned handle is the only way to undo the registration;
    /// callers own its lifetime. The editor must tolerate the handle being
    /// disposed after the editor itself is gone.
    fn register_completion_source(
        &self,
        language_id: &str,
        source: Arc<dyn CompletionSource>,
    ) -> CompletionProviderHandle;
}

/// Opaque disposable token for one active completion-source registration.
///
/// Disposal is deterministic: either explicitly through [`dispose`], or on
/// drop. Either way the registration is released exactly once, including on
/// early-return and panic paths.
///
/// [`dispose`]: CompletionProviderHandle::dispose
pub struct CompletionProviderHandle {
    disposer: Option<Box<dyn FnOnce() + Send>>,
}

impl CompletionProviderHandle {
    /// Wrap a disposal action supplied by the editor adapter.
    pub fn new(disposer: impl FnOnce() + Send + 'static) -> Self {
        CompletionProviderHandle {
            disposer: Some(Box::new(disposer)),
        }
    }

    /// A handle with no registration behind it. Useful for hosts that
    /// present a read-only surface.
    pub fn noop() -> Self {
        CompletionProviderHandle { disposer: None }
    }

    /// Release the registration now.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer();
        }
    }
}

impl Drop for CompletionProviderHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for CompletionProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionProviderHandle")
            .field("live", &self.disposer.is_some())
            .finish()
    }
}
