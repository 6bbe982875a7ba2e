//! # Aiva Simulated Actions
//!
//! [`ActionExecutor`] implementation that performs no real side effect:
//! each action emits a tracing event and returns a deterministic
//! confirmation string built from its inputs.
//!
//! [`ActionExecutor`]: aiva_protocols::ActionExecutor

mod executor;

pub use executor::SimulatedActionExecutor;
