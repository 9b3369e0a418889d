//! Supported editor languages
//!
//! The language set is fixed: Python is the primary language (wired to real
//! embedded execution), the rest run through the simulated execution path.
//! Each key maps to an editor language-mode identifier and a default
//! starter-code boilerplate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported language key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python, the primary language, executed by the embedded interpreter.
    Python,
    /// JavaScript, simulated execution.
    Javascript,
    /// Java, simulated execution.
    Java,
    /// C, simulated execution.
    C,
}

/// Error returned when parsing an unknown language key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language key: {0}")]
pub struct LanguageParseError(String);

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Javascript,
        Language::Java,
        Language::C,
    ];

    /// The lowercase key used in problem data and output transcripts.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Java => "java",
            Language::C => "c",
        }
    }

    /// Human-readable display label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Javascript => "JavaScript",
            Language::Java => "Java",
            Language::C => "C",
        }
    }

    /// The editor widget's language-mode identifier for this key.
    ///
    /// The keys happen to coincide with the editor mode ids today, but the
    /// two namespaces are distinct: completion sources are registered
    /// against mode ids, problem data is keyed by language keys.
    pub fn editor_mode_id(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Java => "java",
            Language::C => "c",
        }
    }

    /// Whether this is the primary language wired to real execution.
    pub fn is_primary(&self) -> bool {
        matches!(self, Language::Python)
    }

    /// Default starter boilerplate used when a problem defines no starter
    /// code for this language.
    pub fn default_boilerplate(&self) -> &'static str {
        match self {
            Language::Python => "def solution():\n    # Write your solution here\n    pass\n",
            Language::Javascript => {
                "function solution() {\n    // Write your solution here\n\n}\n"
            }
            Language::Java => {
                "class Solution {\n    public void solution() {\n        // Write your solution here\n    }\n}\n"
            }
            Language::C => "#include <stdio.h>\n\nvoid solution() {\n    // Write your solution here\n}\n",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::Javascript),
            "java" => Ok(Language::Java),
            "c" => Ok(Language::C),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}
