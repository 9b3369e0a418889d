//! The execution engine
//!
//! One engine per session. `run` routes the buffer either through the
//! embedded interpreter (primary language) or through the simulated
//! delay-and-echo path, and always returns rendered output text: failures
//! are surfaced in the text, never as errors.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use codequiz_domain::{Example, Language};

use crate::interpreter::{InterpreterCell, InterpreterState};
use crate::python;

/// Fixed simulated latency of the mock execution path.
pub const MOCK_EXECUTION_DELAY: Duration = Duration::from_millis(1500);

/// Output when a primary-language run is attempted mid-bootstrap.
pub const NOT_READY_MESSAGE: &str = "Error: Python runtime not loaded yet. Please wait...\n";

/// Output when the interpreter bootstrap failed for good.
pub const UNAVAILABLE_MESSAGE: &str = "Error: Failed to initialize Python runtime\n";

/// Output when a run produced neither stdout nor stderr.
pub const NO_OUTPUT_MESSAGE: &str = "Code executed successfully (no output)\n";

/// Advisory run state, driving the host's run-button affordance.
///
/// No queueing: a run started while `Idle` transitions to `Running` and
/// back to `Idle` when it settles, success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// No run in flight.
    Idle,
    /// A run is in flight; re-running is refused by the UI affordance.
    Running,
}

/// Resets the state to `Idle` when the run settles, regardless of outcome.
struct RunGuard<'a> {
    state: &'a Mutex<ExecutionState>,
}

impl<'a> RunGuard<'a> {
    fn enter(state: &'a Mutex<ExecutionState>) -> Self {
        *state.lock() = ExecutionState::Running;
        RunGuard { state }
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock() = ExecutionState::Idle;
    }
}

/// Runs the current buffer and produces captured output text.
pub struct ExecutionEngine {
    interpreter: Arc<InterpreterCell>,
    state: Mutex<ExecutionState>,
    mock_delay: Duration,
}

impl ExecutionEngine {
    /// Create an engine observing the given interpreter cell.
    pub fn new(interpreter: Arc<InterpreterCell>) -> Self {
        ExecutionEngine {
            interpreter,
            state: Mutex::new(ExecutionState::Idle),
            mock_delay: MOCK_EXECUTION_DELAY,
        }
    }

    /// Current advisory run state.
    pub fn state(&self) -> ExecutionState {
        *self.state.lock()
    }

    /// Whether a run is currently in flight.
    pub fn is_running(&self) -> bool {
        self.state() == ExecutionState::Running
    }

    /// Bootstrap state of the interpreter this engine executes against.
    pub fn interpreter_state(&self) -> InterpreterState {
        self.interpreter.state()
    }

    /// Run `code` as `language`, producing output text.
    ///
    /// The primary language is refused (with an instructional message and
    /// no interpreter call) unless the interpreter is ready. Non-primary
    /// languages take the simulated path, echoing the problem's examples.
    pub async fn run(&self, code: &str, language: Language, examples: &[Example]) -> String {
        if language.is_primary() {
            match self.interpreter.state() {
                InterpreterState::Loading => return NOT_READY_MESSAGE.to_string(),
                InterpreterState::Failed => return UNAVAILABLE_MESSAGE.to_string(),
                InterpreterState::Ready => {}
            }

            debug!(language = %language, "executing through embedded interpreter");
            let _guard = RunGuard::enter(&self.state);
            python::execute(code).await
        } else {
            debug!(language = %language, "simulated execution");
            let _guard = RunGuard::enter(&self.state);
            tokio::time::sleep(self.mock_delay).await;
            mock_transcript(language, examples)
        }
    }
}

/// Deterministic transcript of the simulated execution path.
///
/// Enumerates each example's input and expected output, then closes with
/// "Execution complete.". No actual output is ever compared to anything.
pub fn mock_transcript(language: Language, examples: &[Example]) -> String {
    let mut out = format!("$ Running {} code...\n\n", language.key());

    for (idx, example) in examples.iter().enumerate() {
        out.push_str(&format!(
            "Test case {}:\n  Input: {}\n  Expected output: {}\n\n",
            idx + 1,
            example.input,
            example.output
        ));
    }

    out.push_str("Execution complete.\n");
    out
}
