//! # Aiva Interpreter
//!
//! Turns free-text commands into exactly one of three outcomes: a
//! dispatched email, a dispatched meeting, or a rejection with guidance.
//!
//! The pipeline per command: ask the injected [`TextGenerator`] for a JSON
//! classification under a fixed system instruction, parse it strictly,
//! resolve it into an [`Intent`], and dispatch by exhaustive match into the
//! injected [`ActionExecutor`].
//!
//! [`TextGenerator`]: aiva_protocols::TextGenerator
//! [`ActionExecutor`]: aiva_protocols::ActionExecutor
//! [`Intent`]: aiva_protocols::Intent

mod dispatcher;
mod instruction;
mod intent;

pub use dispatcher::{CommandDispatcher, DispatchError};
pub use instruction::CLASSIFIER_INSTRUCTION;
pub use intent::{resolve_intent, MissingDetails};
