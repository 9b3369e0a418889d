//! The `Problem` record supplied by the page host
//!
//! Problems are owned by the dashboard/catalog collaborator; the
//! editor-integration subsystem only reads them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// An input/output example shown alongside a problem and echoed by the
/// simulated execution transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// The example input value.
    pub input: String,
    /// The expected output for the given input.
    pub output: String,
    /// Optional explanation of why the output is correct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A coding problem presented on the problem page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Unique identifier, used to look up the suggestion catalog entry.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Full problem description.
    pub description: String,
    /// Example input/output pairs, in display order.
    pub examples: Vec<Example>,
    /// Starter source text keyed by language.
    #[serde(default)]
    pub starter_code: HashMap<Language, String>,
}

impl Problem {
    /// Starter code for a language, or the empty string when the problem
    /// defines none. Switching to a language without starter code leaves
    /// the buffer empty rather than carrying over the previous content.
    pub fn starter_code_for(&self, language: Language) -> &str {
        self.starter_code
            .get(&language)
            .map(String::as_str)
            .unwrap_or("")
    }
}
