//! LTI Daemon library
//!
//! This module provides the outer surface of the tool provider:
//! - REST handlers for launches and diagnostics
//! - In-memory backend for widgets, instances, participants and preferences
//! - Instance URL construction
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod storage;
pub mod urls;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError};
pub use server::Server;
pub use storage::{InMemoryStorage, LaunchBackend};
pub use urls::WidgetUrlBuilder;
