//! Session façade: language switching, run/submit flow, teardown.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use codequiz_completion::{CompletionProviderHandle, CompletionSource, EditorSurface};
use codequiz_domain::{Example, Language, Problem, Suggestion};
use codequiz_execution::{
    ExecutionError, InterpreterCell, InterpreterLoader, NOT_READY_MESSAGE,
};
use codequiz_session::{ProblemSession, SUBMITTED_MESSAGE};
use codequiz_storage::SuggestionCatalog;

/// Fake editor recording registrations, disposals and triggers in order.
#[derive(Default)]
struct FakeEditorState {
    events: Mutex<Vec<String>>,
    live: AtomicUsize,
    next_id: AtomicUsize,
    focused: AtomicBool,
}

#[derive(Clone, Default)]
struct FakeEditor {
    state: Arc<FakeEditorState>,
}

impl FakeEditor {
    fn focused() -> Self {
        let editor = FakeEditor::default();
        editor.state.focused.store(true, Ordering::SeqCst);
        editor
    }

    fn events(&self) -> Vec<String> {
        self.state.events.lock().clone()
    }

    fn live_count(&self) -> usize {
        self.state.live.load(Ordering::SeqCst)
    }

    fn trigger_count(&self) -> usize {
        self.events().iter().filter(|e| *e == "trigger").count()
    }
}

impl EditorSurface for FakeEditor {
    fn has_focus(&self) -> bool {
        self.state.focused.load(Ordering::SeqCst)
    }

    fn trigger_suggestions(&self) {
        self.state.events.lock().push("trigger".to_string());
    }

    fn register_completion_source(
        &self,
        language_id: &str,
        _source: Arc<dyn CompletionSource>,
    ) -> CompletionProviderHandle {
        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst);
        self.state
            .events
            .lock()
            .push(format!("register:{language_id}#{id}"));
        self.state.live.fetch_add(1, Ordering::SeqCst);

        let state = Arc::clone(&self.state);
        CompletionProviderHandle::new(move || {
            state.events.lock().push(format!("dispose:#{id}"));
            state.live.fetch_sub(1, Ordering::SeqCst);
        })
    }
}

struct ReadyLoader;

#[async_trait]
impl InterpreterLoader for ReadyLoader {
    async fn load(&self) -> Result<(), ExecutionError> {
        Ok(())
    }
}

fn sample_problem() -> Problem {
    Problem {
        id: 1,
        title: "Two Sum".to_string(),
        description: "Return indices of two numbers that add to target.".to_string(),
        examples: vec![Example {
            input: "nums = [2,7,11,15], target = 9".to_string(),
            output: "[0,1]".to_string(),
            explanation: None,
        }],
        starter_code: HashMap::from([
            (Language::Python, "def two_sum(nums, target):\n    pass\n".to_string()),
            (Language::Javascript, "function twoSum(nums, target) {}\n".to_string()),
        ]),
    }
}

fn catalog() -> Arc<SuggestionCatalog> {
    Arc::new(SuggestionCatalog::new(
        HashMap::new(),
        vec![Suggestion::new("default", "AI Suggestion", "result = None")],
    ))
}

fn session_with(editor: &FakeEditor) -> (ProblemSession, Arc<AtomicUsize>) {
    let backs = Arc::new(AtomicUsize::new(0));
    let on_back = {
        let backs = Arc::clone(&backs);
        move || {
            backs.fetch_add(1, Ordering::SeqCst);
        }
    };
    let session = ProblemSession::new(
        sample_problem(),
        Arc::new(editor.clone()),
        catalog(),
        Arc::new(InterpreterCell::new()),
        on_back,
    );
    (session, backs)
}

#[tokio::test(start_paused = true)]
async fn fresh_session_starts_on_python_with_starter_code() {
    let editor = FakeEditor::default();
    let (session, _) = session_with(&editor);

    assert_eq!(session.language(), Language::Python);
    assert!(session.buffer().starts_with("def two_sum"));
    assert!(session.output().is_empty());
    assert_eq!(session.suggestion_count(), 0);
    assert_eq!(editor.events(), vec!["register:python#0"]);
}

#[tokio::test(start_paused = true)]
async fn switching_replaces_buffer_and_reregisters() {
    let editor = FakeEditor::default();
    let (session, _) = session_with(&editor);

    session.switch_language(Language::Javascript);

    assert_eq!(session.language(), Language::Javascript);
    assert!(session.buffer().starts_with("function twoSum"));
    assert_eq!(
        editor.events(),
        vec!["register:python#0", "dispose:#0", "register:javascript#1"]
    );
    assert_eq!(editor.live_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn switching_to_a_language_without_starter_code_empties_the_buffer() {
    let editor = FakeEditor::default();
    let (session, _) = session_with(&editor);

    session.switch_language(Language::Java);
    assert_eq!(session.buffer(), "");
}

#[tokio::test(start_paused = true)]
async fn switching_to_the_active_language_keeps_edits() {
    let editor = FakeEditor::default();
    let (session, _) = session_with(&editor);

    session.content_changed("def two_sum(nums, target):\n    return []");
    session.switch_language(Language::Python);

    assert!(session.buffer().ends_with("return []"));
    // Still re-registered.
    assert_eq!(editor.live_count(), 1);
    assert_eq!(editor.events().last().map(String::as_str), Some("register:python#1"));
}

#[tokio::test(start_paused = true)]
async fn switching_never_resets_the_acceptance_log() {
    let editor = FakeEditor::default();
    let (session, _) = session_with(&editor);

    session.accept_suggestion(Some("Use a hash map for O(n) lookup"));
    session.switch_language(Language::C);
    session.switch_language(Language::Python);

    assert_eq!(session.suggestion_count(), 1);
    assert_eq!(session.suggestion_log()[0].label, "Use a hash map for O(n) lookup");
}

#[tokio::test(start_paused = true)]
async fn edits_arm_the_idle_trigger() {
    let editor = FakeEditor::focused();
    let (session, _) = session_with(&editor);

    session.content_changed("x");
    session.content_changed("xy");

    tokio::time::advance(Duration::from_millis(2000)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert_eq!(editor.trigger_count(), 1);
    assert_eq!(session.buffer(), "xy");
}

#[tokio::test(start_paused = true)]
async fn python_run_while_loading_reports_not_ready() {
    let editor = FakeEditor::default();
    let (session, _) = session_with(&editor);

    assert!(session.interpreter_loading());
    let output = session.run().await;
    assert_eq!(output, NOT_READY_MESSAGE);
    assert_eq!(session.output(), NOT_READY_MESSAGE);
}

#[tokio::test(start_paused = true)]
async fn mock_run_stores_the_transcript() {
    let editor = FakeEditor::default();
    let (session, _) = session_with(&editor);

    session.switch_language(Language::Javascript);
    let output = session.run().await;

    assert!(output.starts_with("$ Running javascript code...\n\n"));
    assert!(output.contains("Test case 1:"));
    assert_eq!(session.output(), output);
    assert!(!session.is_running());
}

#[tokio::test(start_paused = true)]
async fn submit_renders_message_then_navigates_back_after_the_delay() {
    let editor = FakeEditor::default();
    let (session, backs) = session_with(&editor);
    let session = Arc::new(session);

    let submitting = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.submit().await })
    };
    tokio::task::yield_now().await;

    assert_eq!(session.output(), SUBMITTED_MESSAGE);
    assert_eq!(backs.load(Ordering::SeqCst), 0);

    tokio::time::advance(Duration::from_millis(1999)).await;
    tokio::task::yield_now().await;
    assert_eq!(backs.load(Ordering::SeqCst), 0, "back must wait out the delay");

    tokio::time::advance(Duration::from_millis(1)).await;
    submitting.await.unwrap();
    assert_eq!(backs.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn go_back_navigates_immediately() {
    let editor = FakeEditor::default();
    let (session, backs) = session_with(&editor);

    session.go_back();
    assert_eq!(backs.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn close_disposes_the_registration() {
    let editor = FakeEditor::default();
    let (session, _) = session_with(&editor);
    assert_eq!(editor.live_count(), 1);

    session.close();
    assert_eq!(editor.live_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_session_disposes_the_registration() {
    let editor = FakeEditor::default();
    {
        let (_session, _) = session_with(&editor);
        assert_eq!(editor.live_count(), 1);
    }
    assert_eq!(editor.live_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn bootstrapped_cell_lets_the_session_leave_loading() {
    let cell = Arc::new(InterpreterCell::new());
    cell.bootstrap(&ReadyLoader).await;

    let editor = FakeEditor::default();
    let backs = Arc::new(AtomicUsize::new(0));
    let on_back = {
        let backs = Arc::clone(&backs);
        move || {
            backs.fetch_add(1, Ordering::SeqCst);
        }
    };
    let session = ProblemSession::new(
        sample_problem(),
        Arc::new(editor),
        catalog(),
        cell,
        on_back,
    );
    assert!(!session.interpreter_loading());
}
