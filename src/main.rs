//! Aiva - AI assistant backend
//!
//! Main entry point: loads configuration, wires the provider and action
//! capabilities, and runs the HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use aiva_actions_sim::SimulatedActionExecutor;
use aiva_api::{ApiConfig, ApiServer, AppState};
use aiva_config::AivaConfig;
use aiva_provider_gemini::GeminiProvider;

/// Aiva CLI.
#[derive(Parser)]
#[command(name = "aiva")]
#[command(about = "AI assistant backend: chat proxy and natural-language command dispatch")]
#[command(version)]
struct Cli {
    /// Server host (overrides the HOST environment variable)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,
}

/// Initialize tracing with console output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // A local .env file supplements the process environment when present.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Missing credential is the sole fatal startup condition: refuse to
    // serve rather than run without one.
    let mut config = match AivaConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    info!("Starting Aiva v{}", env!("CARGO_PKG_VERSION"));
    info!("Model: {}", config.model);

    let generator = Arc::new(GeminiProvider::new(config.api_key.clone(), &config.model));
    let executor = Arc::new(SimulatedActionExecutor::new());
    let state = Arc::new(AppState::new(generator, executor));

    let server = ApiServer::new(ApiConfig::new(&config.host, config.port), state);

    info!("Aiva ready:");
    info!("  Chat UI:            http://{}/", server.addr());
    info!("  POST /api/chat      - chat with the model");
    info!("  POST /api/automate  - natural-language commands");

    server.run().await?;

    info!("Shutting down...");
    Ok(())
}
