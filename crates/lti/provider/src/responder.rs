//! Launch responses
//!
//! Success redirects the browser to the instance. Every failure goes through
//! [`LaunchResponder::failure`], which prefers the consumer's return URL over
//! a bare status code.

use crate::error::{LaunchError, LaunchResult};
use crate::traits::InstanceUrlBuilder;
use lti_types::{LaunchRequest, WidgetInstance};
use serde::Serialize;
use std::sync::Arc;

/// How the instance was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchStatus {
    Found,
    Created,
}

impl LaunchStatus {
    pub fn code(&self) -> u16 {
        match self {
            LaunchStatus::Found => 200,
            LaunchStatus::Created => 201,
        }
    }
}

/// What to send back to the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LaunchResponse {
    /// Send the browser to the instance
    Redirect { status: LaunchStatus, location: String },

    /// Launch failed; send the browser back to the consumer
    Fallback { location: String, error_status: u16 },

    /// Launch failed and the consumer gave no return URL
    Error { status: u16 },
}

impl LaunchResponse {
    pub fn status_code(&self) -> u16 {
        match self {
            LaunchResponse::Redirect { status, .. } => status.code(),
            LaunchResponse::Fallback { .. } => 302,
            LaunchResponse::Error { status } => *status,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            LaunchResponse::Redirect { location, .. } | LaunchResponse::Fallback { location, .. } => {
                Some(location)
            }
            LaunchResponse::Error { .. } => None,
        }
    }
}

#[derive(Clone)]
pub struct LaunchResponder {
    urls: Arc<dyn InstanceUrlBuilder>,
}

impl LaunchResponder {
    pub fn new(urls: Arc<dyn InstanceUrlBuilder>) -> Self {
        Self { urls }
    }

    /// Instance URL with escaped ampersands normalized
    pub fn instance_location(&self, instance: &WidgetInstance) -> LaunchResult<String> {
        let url = self.urls.instance_url(instance)?;
        Ok(url.replace("&amp;", "&"))
    }

    pub fn failure(error: &LaunchError, request: &LaunchRequest) -> LaunchResponse {
        match request.return_url() {
            Some(url) => LaunchResponse::Fallback {
                location: url.to_string(),
                error_status: error.status_code(),
            },
            None => LaunchResponse::Error {
                status: error.status_code(),
            },
        }
    }
}
