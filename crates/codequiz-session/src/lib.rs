#![warn(missing_docs)]

//! CodeQuiz Problem Session
//!
//! The problem page's non-UI state behind one façade: buffer content, the
//! active language, the output panel text, the acceptance log, the
//! completion provider registration, the idle-trigger scheduler and the
//! execution engine. The host shell supplies a `Problem` and a back
//! callback; everything else lives here.

pub mod session;

pub use session::{ProblemSession, RUNNING_MESSAGE, SUBMITTED_MESSAGE, SUBMIT_REDIRECT_DELAY};
