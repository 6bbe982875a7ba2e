//! # Aiva API
//!
//! HTTP surface for the Aiva backend:
//!
//! - `GET /` - embedded chat UI
//! - `GET /health` - health check
//! - `POST /api/chat` - forward a conversation to the model, relay its reply
//! - `POST /api/automate` - interpret a command and dispatch an action
//!
//! All request-handling failures convert to JSON `{error}` responses at the
//! handler boundary; nothing here crashes the process.

mod error;
mod handlers;
mod routes;
mod server;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{ApiConfig, ApiServer};
pub use state::AppState;
