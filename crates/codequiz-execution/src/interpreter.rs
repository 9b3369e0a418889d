//! Interpreter bootstrap
//!
//! The embedded interpreter is process-wide: one bootstrap attempt per
//! process, shared by every session. The first session to observe the
//! absent state claims the bootstrap; everyone else subscribes and waits.
//! Failure is terminal for the process, there is no automatic retry.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::error::ExecutionResult;

/// Observable bootstrap state of the embedded interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterState {
    /// Bootstrap has not finished (or not started) yet.
    Loading,
    /// The interpreter is initialized and can execute code.
    Ready,
    /// Bootstrap failed; execution of the primary language is refused for
    /// the rest of the process lifetime.
    Failed,
}

/// Internal lifecycle phase. `Absent` is distinct from `Loading` so the
/// single-writer claim rule has something to claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Absent,
    Loading,
    Ready,
    Failed,
}

/// Performs the actual one-time interpreter initialization.
///
/// A trait so the bootstrap state machine is testable without touching a
/// real interpreter.
#[async_trait]
pub trait InterpreterLoader: Send + Sync {
    /// Load and initialize the interpreter runtime.
    async fn load(&self) -> ExecutionResult<()>;
}

/// Shared bootstrap cell for the embedded interpreter.
///
/// Exactly one caller of [`bootstrap`] runs the loader; concurrent callers
/// observe the in-flight attempt and settle on the same outcome. The
/// process-wide cell lives behind [`global`]; fresh cells exist for tests.
///
/// [`bootstrap`]: InterpreterCell::bootstrap
/// [`global`]: InterpreterCell::global
#[derive(Debug)]
pub struct InterpreterCell {
    phase: watch::Sender<Phase>,
}

static GLOBAL_CELL: Lazy<Arc<InterpreterCell>> = Lazy::new(|| Arc::new(InterpreterCell::new()));

impl InterpreterCell {
    /// Create a fresh, absent cell.
    pub fn new() -> Self {
        let (phase, _) = watch::channel(Phase::Absent);
        InterpreterCell { phase }
    }

    /// The process-wide cell shared by all sessions.
    pub fn global() -> Arc<InterpreterCell> {
        Arc::clone(&GLOBAL_CELL)
    }

    /// Current state as observed by callers. An unclaimed cell reports
    /// `Loading`: from the outside "not started yet" and "mid-bootstrap"
    /// are the same "cannot run yet".
    pub fn state(&self) -> InterpreterState {
        match *self.phase.borrow() {
            Phase::Absent | Phase::Loading => InterpreterState::Loading,
            Phase::Ready => InterpreterState::Ready,
            Phase::Failed => InterpreterState::Failed,
        }
    }

    /// Whether the interpreter is ready to execute code.
    pub fn is_ready(&self) -> bool {
        self.state() == InterpreterState::Ready
    }

    /// Drive the bootstrap and wait for it to settle.
    ///
    /// The first caller to observe `Absent` claims the attempt and runs the
    /// loader; every other caller waits on the phase channel. All callers
    /// return the same settled state. Once `Failed`, later calls return
    /// `Failed` immediately without invoking the loader again.
    pub async fn bootstrap(&self, loader: &dyn InterpreterLoader) -> InterpreterState {
        let mut claimed = false;
        self.phase.send_modify(|phase| {
            if *phase == Phase::Absent {
                *phase = Phase::Loading;
                claimed = true;
            }
        });

        if claimed {
            info!("claimed interpreter bootstrap");
            match loader.load().await {
                Ok(()) => {
                    info!("interpreter bootstrap complete");
                    self.phase.send_replace(Phase::Ready);
                }
                Err(err) => {
                    warn!(error = %err, "interpreter bootstrap failed");
                    self.phase.send_replace(Phase::Failed);
                }
            }
        }

        let mut rx = self.phase.subscribe();
        loop {
            match *rx.borrow_and_update() {
                Phase::Ready => return InterpreterState::Ready,
                Phase::Failed => return InterpreterState::Failed,
                Phase::Absent | Phase::Loading => {}
            }
            if rx.changed().await.is_err() {
                // Sender gone before settling; treat as failed.
                return InterpreterState::Failed;
            }
        }
    }
}

impl Default for InterpreterCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Loader for the embedded CPython interpreter.
///
/// Initialization happens on a blocking thread; acquiring the GIL for the
/// first time initializes the runtime.
#[derive(Debug, Default)]
pub struct PythonLoader;

#[async_trait]
impl InterpreterLoader for PythonLoader {
    async fn load(&self) -> ExecutionResult<()> {
        tokio::task::spawn_blocking(|| {
            pyo3::Python::with_gil(|py| {
                let version = py.version();
                info!(%version, "embedded Python interpreter initialized");
            });
        })
        .await?;
        Ok(())
    }
}
