//! # Aiva Config
//!
//! Environment-driven configuration for the Aiva backend.
//!
//! The provider credential is a fatal startup requirement: without
//! `GEMINI_API_KEY` the process must refuse to serve.

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::AivaConfig;
