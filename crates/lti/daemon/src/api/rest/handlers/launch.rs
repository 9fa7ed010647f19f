//! Basic LTI launch handlers

use crate::api::rest::state::AppState;
use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use lti_provider::{LaunchError, LaunchResponse, LaunchStatus};
use lti_types::LaunchRequest;

/// Launch the widget named in the path
pub async fn launch_widget(
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
    RawQuery(query): RawQuery,
    body: Body,
) -> LaunchReply {
    LaunchReply(launch(&state, Some(&widget_id), query.as_deref(), body).await)
}

/// Launch with no widget segment; always answered as a failed launch
pub async fn launch_without_widget(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    body: Body,
) -> LaunchReply {
    LaunchReply(launch(&state, None, query.as_deref(), body).await)
}

async fn launch(
    state: &AppState,
    widget_id: Option<&str>,
    query: Option<&str>,
    body: Body,
) -> LaunchResponse {
    match read_launch_body(body, state.max_body_size).await {
        Ok(bytes) => {
            let request = parse_launch_request(query, &bytes);
            state.pipeline.launch(widget_id, &request).await
        }
        Err(truncated) => {
            let request = parse_launch_request(query, truncated.complete_pairs());
            let err = LaunchError::BodyRejected(truncated.reason);
            state.pipeline.reject(widget_id, &err, &request)
        }
    }
}

/// Body bytes received before the launch body was cut off
#[derive(Debug)]
pub struct TruncatedBody {
    pub received: Vec<u8>,
    pub reason: String,
}

impl TruncatedBody {
    /// The received bytes up to the last pair separator
    pub fn complete_pairs(&self) -> &[u8] {
        match self.received.iter().rposition(|b| *b == b'&') {
            Some(end) => &self.received[..end],
            None => &[],
        }
    }
}

/// Read the body, stopping once it exceeds `limit` bytes
pub async fn read_launch_body(body: Body, limit: usize) -> Result<Vec<u8>, TruncatedBody> {
    let mut stream = body.into_data_stream();
    let mut received = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                return Err(TruncatedBody {
                    received,
                    reason: e.to_string(),
                })
            }
        };
        if received.len() + chunk.len() > limit {
            let room = limit - received.len();
            received.extend_from_slice(&chunk[..room]);
            return Err(TruncatedBody {
                received,
                reason: format!("launch body exceeds {} bytes", limit),
            });
        }
        received.extend_from_slice(&chunk);
    }
    Ok(received)
}

/// Collect parameters from the query string, then the form body.
///
/// Decoding is lenient and never fails, so a malformed body still reaches the
/// pipeline and can be answered with the consumer's return URL.
pub fn parse_launch_request(query: Option<&str>, body: &[u8]) -> LaunchRequest {
    let query_pairs = url::form_urlencoded::parse(query.unwrap_or_default().as_bytes());
    let body_pairs = url::form_urlencoded::parse(body);
    LaunchRequest::from_pairs(
        query_pairs
            .chain(body_pairs)
            .map(|(k, v)| (k.into_owned(), v.into_owned())),
    )
}

/// HTTP rendering of a launch response
#[derive(Debug)]
pub struct LaunchReply(pub LaunchResponse);

impl IntoResponse for LaunchReply {
    fn into_response(self) -> Response {
        match self.0 {
            LaunchResponse::Redirect { status, location } => {
                let status = match status {
                    LaunchStatus::Found => StatusCode::OK,
                    LaunchStatus::Created => StatusCode::CREATED,
                };
                with_location(status, &location, 500)
            }
            LaunchResponse::Fallback {
                location,
                error_status,
            } => with_location(StatusCode::FOUND, &location, error_status),
            LaunchResponse::Error { status } => bare_status(status),
        }
    }
}

/// `status` with a `Location` header, or the bare `error_status` when the
/// location is not a valid header value
fn with_location(status: StatusCode, location: &str, error_status: u16) -> Response {
    match HeaderValue::from_bytes(location.as_bytes()) {
        Ok(value) => (status, [(header::LOCATION, value)]).into_response(),
        Err(_) => {
            tracing::warn!(location, "Launch location is not a valid header value");
            bare_status(error_status)
        }
    }
}

fn bare_status(status: u16) -> Response {
    StatusCode::from_u16(status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}
