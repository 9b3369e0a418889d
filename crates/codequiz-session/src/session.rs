//! The problem-page session
//!
//! One [`ProblemSession`] per opened problem. The session owns the editor
//! buffer, the active language, the output panel text and the acceptance
//! log; it wires the completion subsystem and the execution engine to the
//! host's editor surface. A fresh session starts with an empty log and
//! empty output; leaving the page (dropping the session) tears down the
//! provider registration and any pending idle timer.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, info};

use codequiz_completion::{AcceptanceLog, EditorSurface, IdleScheduler, ProviderManager};
use codequiz_domain::{Language, Problem, SuggestionLogEntry};
use codequiz_execution::{ExecutionEngine, InterpreterCell, InterpreterState, PythonLoader};
use codequiz_storage::{builtin_catalog, SuggestionCatalog};

/// Delay between rendering the submitted message and invoking the back
/// callback.
pub const SUBMIT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Output panel text rendered on submission.
pub const SUBMITTED_MESSAGE: &str = "Submitting solution...\n\n\
    Your solution has been submitted successfully.\n\
    Redirecting to dashboard...";

/// Interim output shown while a simulated run is in flight.
pub const RUNNING_MESSAGE: &str = "Running code...\n";

type BackCallback = Box<dyn Fn() + Send + Sync>;

/// Per-problem session state exposed to the host shell.
pub struct ProblemSession {
    problem: Problem,
    language: Mutex<Language>,
    buffer: Mutex<String>,
    output: Mutex<String>,
    log: AcceptanceLog,
    provider: ProviderManager,
    scheduler: IdleScheduler,
    engine: ExecutionEngine,
    on_back: BackCallback,
}

impl ProblemSession {
    /// Open a session with explicit collaborators. The active language
    /// starts as the primary language, the buffer holds its starter code,
    /// and the completion source is registered immediately.
    pub fn new(
        problem: Problem,
        editor: Arc<dyn EditorSurface>,
        catalog: Arc<SuggestionCatalog>,
        interpreter: Arc<InterpreterCell>,
        on_back: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let language = Language::Python;
        let buffer = problem.starter_code_for(language).to_string();

        let provider = ProviderManager::new(Arc::clone(&editor), catalog, problem.id);
        provider.register_for(language.editor_mode_id());

        info!(problem_id = problem.id, title = %problem.title, "session opened");
        ProblemSession {
            problem,
            language: Mutex::new(language),
            buffer: Mutex::new(buffer),
            output: Mutex::new(String::new()),
            log: AcceptanceLog::new(),
            provider,
            scheduler: IdleScheduler::new(editor),
            engine: ExecutionEngine::new(interpreter),
            on_back: Box::new(on_back),
        }
    }

    /// Open a session against the builtin catalog and the process-wide
    /// interpreter cell, kicking off its bootstrap in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open(
        problem: Problem,
        editor: Arc<dyn EditorSurface>,
        on_back: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let interpreter = InterpreterCell::global();
        {
            let cell = Arc::clone(&interpreter);
            tokio::spawn(async move {
                cell.bootstrap(&PythonLoader).await;
            });
        }

        let catalog = Arc::new(builtin_catalog().clone());
        Self::new(problem, editor, catalog, interpreter, on_back)
    }

    /// The problem this session presents.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// The active editor language.
    pub fn language(&self) -> Language {
        *self.language.lock()
    }

    /// Current buffer content.
    pub fn buffer(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Current output panel text.
    pub fn output(&self) -> String {
        self.output.lock().clone()
    }

    /// Snapshot of the acceptance log, oldest first.
    pub fn suggestion_log(&self) -> Vec<SuggestionLogEntry> {
        self.log.entries()
    }

    /// Number of accepted suggestions so far.
    pub fn suggestion_count(&self) -> usize {
        self.log.len()
    }

    /// Whether a run is currently in flight.
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Whether the embedded interpreter is still bootstrapping.
    pub fn interpreter_loading(&self) -> bool {
        self.engine.interpreter_state() == InterpreterState::Loading
    }

    /// Switch the active editor language.
    ///
    /// Replaces the buffer with the new language's starter code (empty when
    /// the problem defines none) and re-registers the completion source for
    /// its editor-mode id. Switching to the already-active language only
    /// re-registers; the user's edits stay put. Never touches the
    /// acceptance log or the execution state.
    pub fn switch_language(&self, new_language: Language) {
        let mut language = self.language.lock();
        if *language != new_language {
            *language = new_language;
            *self.buffer.lock() = self.problem.starter_code_for(new_language).to_string();
            debug!(language = %new_language, "switched language");
        }
        drop(language);

        self.provider.register_for(new_language.editor_mode_id());
    }

    /// Note a buffer edit from the editor. Updates the stored content and
    /// restarts the idle-suggestion timer.
    pub fn content_changed(&self, new_content: &str) {
        *self.buffer.lock() = new_content.to_string();
        self.scheduler.content_changed();
    }

    /// Record a suggestion acceptance reported through the accept
    /// side-channel.
    pub fn accept_suggestion(&self, label: Option<&str>) {
        self.log.record(label);
    }

    /// Run the current buffer and store the rendered output.
    pub async fn run(&self) -> String {
        let (code, language) = (self.buffer.lock().clone(), self.language());

        *self.output.lock() = if language.is_primary() {
            String::new()
        } else {
            RUNNING_MESSAGE.to_string()
        };

        let result = self
            .engine
            .run(&code, language, &self.problem.examples)
            .await;
        *self.output.lock() = result.clone();
        result
    }

    /// Submit the solution: render the submitted message, wait out the
    /// redirect delay, then invoke the back callback.
    pub async fn submit(&self) {
        *self.output.lock() = SUBMITTED_MESSAGE.to_string();
        tokio::time::sleep(SUBMIT_REDIRECT_DELAY).await;
        (self.on_back)();
    }

    /// Navigate back immediately, without the submission ceremony.
    pub fn go_back(&self) {
        (self.on_back)();
    }

    /// Tear the session down: dispose the completion registration and
    /// cancel any pending idle timer. Also runs implicitly on drop.
    pub fn close(&self) {
        self.scheduler.cancel();
        self.provider.dispose();
        info!(problem_id = self.problem.id, "session closed");
    }
}
