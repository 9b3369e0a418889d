#![warn(missing_docs)]

//! CodeQuiz Execution Subsystem
//!
//! Runs the problem-page buffer:
//!
//! - **Python** (the primary language) executes for real inside an embedded
//!   CPython interpreter, with stdout and stderr captured into buffers.
//!   The interpreter is bootstrapped once per process through
//!   [`InterpreterCell`]; sessions that arrive mid-bootstrap wait for the
//!   claimant instead of starting a second initialization.
//! - **Every other language** runs through a simulated delay-and-echo path
//!   that enumerates the problem's example cases. Nothing is verified;
//!   callers must never mistake the mock transcript for real output.
//!
//! All failures are terminal to the single run they occur in and are
//! rendered as human-readable output text; nothing propagates to the host.

pub mod engine;
pub mod error;
pub mod interpreter;
mod python;

pub use engine::{
    mock_transcript, ExecutionEngine, ExecutionState, MOCK_EXECUTION_DELAY, NOT_READY_MESSAGE,
    NO_OUTPUT_MESSAGE, UNAVAILABLE_MESSAGE,
};
pub use error::{ExecutionError, ExecutionResult};
pub use interpreter::{InterpreterCell, InterpreterLoader, InterpreterState, PythonLoader};
