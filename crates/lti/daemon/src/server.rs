//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::storage::InMemoryStorage;
use crate::urls::WidgetUrlBuilder;
use axum::Router;
use lti_provider::{Collaborators, LaunchPipeline};
use std::sync::Arc;
use tokio::net::TcpListener;

/// LTI Daemon Server
pub struct Server {
    config: DaemonConfig,
    storage: Arc<InMemoryStorage>,
    pipeline: Arc<LaunchPipeline>,
}

impl Server {
    /// Create a new server with the given configuration
    pub async fn new(config: DaemonConfig) -> DaemonResult<Self> {
        // Create storage seeded with the configured catalog
        let storage = Arc::new(InMemoryStorage::with_widgets(config.widgets.clone()).await);

        let urls = WidgetUrlBuilder::new(
            &config.launch.public_base_url,
            config.launch.proxy_url.clone(),
        )
        .map_err(|e| DaemonError::Config(e.to_string()))?;

        let pipeline = Arc::new(LaunchPipeline::new(Collaborators::from_backend(
            storage.clone(),
            Arc::new(urls),
        )));

        Ok(Self {
            config,
            storage,
            pipeline,
        })
    }

    /// Build the HTTP application
    pub fn app(&self) -> Router {
        let state = AppState::new(
            self.pipeline.clone(),
            self.storage.clone(),
            self.config.server.max_body_size,
        );
        create_router(state, &self.config.server)
    }

    /// Run the server
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        // Create router
        let app = self.app();

        // Create listener
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("LTI daemon listening on {}", addr);
        tracing::info!(
            widgets = self.config.widgets.len(),
            verifier = self.pipeline.verifier_name(),
            "Launch endpoint ready at /basiclti/:widget_id"
        );

        // Run server with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("LTI daemon shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
