//! Application state for API handlers

use crate::storage::LaunchBackend;
use lti_provider::LaunchPipeline;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Launch pipeline
    pub pipeline: Arc<LaunchPipeline>,

    /// Storage backend
    pub storage: Arc<dyn LaunchBackend>,

    /// Largest launch body read in full, in bytes
    pub max_body_size: usize,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        pipeline: Arc<LaunchPipeline>,
        storage: Arc<dyn LaunchBackend>,
        max_body_size: usize,
    ) -> Self {
        Self {
            pipeline,
            storage,
            max_body_size,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let duration = chrono::Utc::now() - self.started_at;
        let secs = duration.num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}
