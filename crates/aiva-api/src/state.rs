//! Shared application state.

use std::sync::Arc;

use aiva_interpreter::CommandDispatcher;
use aiva_protocols::action::ActionExecutor;
use aiva_protocols::provider::TextGenerator;

/// State shared by all handlers.
///
/// Holds only injected capabilities; no request outlives its handler and
/// no data is shared between requests.
pub struct AppState {
    /// Provider used directly by the chat endpoint.
    pub generator: Arc<dyn TextGenerator>,
    /// Interpreter used by the automation endpoint.
    pub dispatcher: CommandDispatcher,
}

impl AppState {
    /// Wire the state from its two capabilities.
    pub fn new(generator: Arc<dyn TextGenerator>, executor: Arc<dyn ActionExecutor>) -> Self {
        let dispatcher = CommandDispatcher::new(generator.clone(), executor);
        Self {
            generator,
            dispatcher,
        }
    }
}
