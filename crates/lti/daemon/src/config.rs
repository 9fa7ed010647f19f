//! Configuration for lti-daemon

use lti_types::Widget;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Launch handling configuration
    #[serde(default)]
    pub launch: LaunchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Widgets seeded into the catalog at startup
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Largest launch body read in full, in bytes. A longer body fails the
    /// launch with 413, or the fallback when a return URL was read.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            enable_cors: true,
            max_body_size: default_max_body_size(),
        }
    }
}

/// Launch handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Base URL relative widget start pages are resolved against
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Proxy endpoint handed to running widgets, if any
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            proxy_url: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_max_body_size() -> usize {
    64 * 1024
}

fn default_public_base_url() -> String {
    "http://127.0.0.1:8080/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration from defaults, an optional file and `LTI_*` env vars
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Nested keys use a double underscore: LTI_LAUNCH__PROXY_URL
        builder = builder.add_source(
            config::Environment::with_prefix("LTI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
