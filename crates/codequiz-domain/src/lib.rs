#![warn(missing_docs)]

//! CodeQuiz Domain Types
//!
//! Core domain types shared across the CodeQuiz workspace: the `Problem`
//! record supplied by the page host, the `Suggestion` shape served by the
//! completion source, the accepted-suggestion log entry, and the fixed set
//! of supported editor languages.
//!
//! These types are immutable inputs to the editor-integration subsystem.
//! Problem persistence, authoring and grading live outside this workspace.

pub mod language;
pub mod problem;
pub mod suggestion;

pub use language::{Language, LanguageParseError};
pub use problem::{Example, Problem};
pub use suggestion::{Suggestion, SuggestionAction, SuggestionLogEntry};
