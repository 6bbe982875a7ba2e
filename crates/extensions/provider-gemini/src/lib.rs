//! # Aiva Gemini Provider
//!
//! [`TextGenerator`] implementation backed by the Google generative-language
//! API (`generateContent`).
//!
//! [`TextGenerator`]: aiva_protocols::TextGenerator

mod client;
mod provider;
mod types;

pub use client::GeminiClient;
pub use provider::GeminiProvider;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
