#![warn(missing_docs)]

//! Shared ambient utilities for the CodeQuiz workspace
//!
//! Carries the concerns every crate needs but none owns: tracing
//! initialization and error cause-chain formatting for rendering failures
//! into the output surface.

pub mod logging;

pub use logging::{format_error, init, init_for_tests};
