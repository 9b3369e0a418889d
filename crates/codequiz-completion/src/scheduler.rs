//! Idle-trigger scheduling
//!
//! Simulates "AI thinking while you pause": every buffer edit restarts a
//! quiet-period timer, and only when the timer survives the full period
//! with the editor still focused is the suggestion list triggered. A burst
//! of edits therefore yields at most one trigger, scheduled from the last
//! edit.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::editor::EditorSurface;

/// Fixed quiet period after the last edit before suggestions are
/// auto-triggered.
pub const QUIET_PERIOD: Duration = Duration::from_millis(2000);

/// Observes edit events and, after the quiet period, asks the editor to
/// present suggestions if it still has focus.
///
/// Dropping the scheduler cancels any pending timer; no timer outlives the
/// page.
pub struct IdleScheduler {
    editor: Arc<dyn EditorSurface>,
    quiet_period: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl IdleScheduler {
    /// Create a scheduler with the standard quiet period.
    pub fn new(editor: Arc<dyn EditorSurface>) -> Self {
        Self::with_quiet_period(editor, QUIET_PERIOD)
    }

    /// Create a scheduler with a custom quiet period.
    pub fn with_quiet_period(editor: Arc<dyn EditorSurface>, quiet_period: Duration) -> Self {
        IdleScheduler {
            editor,
            quiet_period,
            pending: Mutex::new(None),
        }
    }

    /// Note a buffer-content change: cancel any pending timer and arm a
    /// fresh one. The latest edit always wins.
    ///
    /// Must be called from within a tokio runtime.
    pub fn content_changed(&self) {
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let editor = Arc::clone(&self.editor);
        let quiet_period = self.quiet_period;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            if editor.has_focus() {
                trace!("quiet period elapsed with focus, triggering suggestions");
                editor.trigger_suggestions();
            } else {
                trace!("quiet period elapsed without focus, staying silent");
            }
        }));
    }

    /// Cancel any pending timer without triggering. Called on teardown;
    /// also runs implicitly on drop.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.abort();
        }
    }
}

impl Drop for IdleScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
