//! LTI Daemon - Basic LTI tool provider
//!
//! The daemon provides:
//! - Launch endpoint for Tool Consumers at `/basiclti/:widget_id`
//! - Widget catalog seeded from configuration
//! - Diagnostic REST API under `/api/v1`

use clap::Parser;
use lti_daemon::error::{DaemonError, DaemonResult};
use lti_daemon::{DaemonConfig, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// LTI Daemon CLI
#[derive(Parser)]
#[command(name = "ltid")]
#[command(about = "LTI Daemon - Basic LTI tool provider", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "LTI_CONFIG")]
    config: Option<String>,

    /// Listen address (overrides configuration)
    #[arg(short, long, env = "LTI_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level (overrides configuration)
    #[arg(long, env = "LTI_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "LTI_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config =
        DaemonConfig::load(cli.config.as_deref()).map_err(|e| DaemonError::Config(e.to_string()))?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        widgets = config.widgets.len(),
        "Starting LTI daemon"
    );

    // Create and run server
    let server = Server::new(config).await?;
    server.run().await
}
