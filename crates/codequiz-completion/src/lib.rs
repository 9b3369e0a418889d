#![warn(missing_docs)]

//! CodeQuiz Completion Subsystem
//!
//! Binds a per-problem suggestion catalog to a host editor widget:
//!
//! 1. **Provider lifecycle**: [`ProviderManager`] keeps exactly one
//!    completion source registered against the editor at a time, disposing
//!    the previous registration before installing a replacement.
//! 2. **Idle triggering**: [`IdleScheduler`] watches buffer edits and asks
//!    the editor to present its suggestion list after a quiet period,
//!    provided the editor still holds focus.
//! 3. **Acceptance logging**: [`AcceptanceLog`] appends one entry per
//!    accepted suggestion, delivered through the accept side-channel each
//!    completion item carries.
//!
//! The editor widget itself stays behind the narrow [`EditorSurface`]
//! capability trait so the whole subsystem is testable without one.
//!
//! A remote next-line suggestion client ([`RemoteSuggestionClient`]) is
//! available for hosts that pair the static catalog with a live suggestion
//! service; catalog suggestions remain the source of truth when the service
//! is unreachable.

pub mod editor;
pub mod error;
pub mod log;
pub mod provider;
pub mod remote;
pub mod scheduler;
pub mod types;

pub use editor::{CompletionProviderHandle, CompletionSource, EditorSurface};
pub use error::{CompletionError, CompletionResult};
pub use log::AcceptanceLog;
pub use provider::{CatalogCompletionSource, ProviderManager};
pub use remote::{RemoteSuggestionClient, SuggestionRequest};
pub use scheduler::{IdleScheduler, QUIET_PERIOD};
pub use types::{AcceptCommand, CompletionItem, CursorPosition, ACCEPT_COMMAND_ID};
