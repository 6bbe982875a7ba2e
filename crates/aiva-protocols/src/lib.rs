//! # Aiva Protocols
//!
//! Core protocol definitions (traits and shared types) for the Aiva backend.
//! Contains interface definitions only - no implementations.
//!
//! ## Core Traits
//!
//! - [`TextGenerator`] - Trait for generative-language providers
//! - [`ActionExecutor`] - Trait for automation action implementations

pub mod action;
pub mod error;
pub mod intent;
pub mod provider;
pub mod types;

// Re-export core traits and types
pub use action::ActionExecutor;
pub use error::{ActionError, ProviderError};
pub use intent::{DispatchOutcome, Intent, OutcomeStatus, RawClassification};
pub use provider::TextGenerator;
pub use types::{ChatTurn, TurnPart, TurnRole};
