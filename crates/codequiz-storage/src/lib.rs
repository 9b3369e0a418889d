#![warn(missing_docs)]

//! CodeQuiz Suggestion Storage
//!
//! The static suggestion catalog: ordered per-problem completion lists plus
//! one default list used whenever a problem has no entry of its own. The
//! builtin catalog is baked into the binary; hosts may also construct
//! catalogs from their own data.

pub mod catalog;
mod defaults;

pub use catalog::SuggestionCatalog;
pub use defaults::builtin_catalog;
