//! Launch verification seam
//!
//! Signature checking is not implemented. The default verifier accepts every
//! launch and hands back the consumer key as an opaque namespacing token; a
//! real OAuth signature check plugs in here without touching the pipeline.

use crate::error::VerificationError;
use lti_types::{ConsumerToken, LaunchRequest};

pub trait LaunchVerifier: Send + Sync {
    /// Human-readable name of this verifier
    fn name(&self) -> &str;

    /// Accept or reject the launch, yielding the consumer token on success
    fn verify(&self, request: &LaunchRequest) -> Result<ConsumerToken, VerificationError>;
}

/// Trusts the `oauth_consumer_key` parameter as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumerKeyPassthrough;

impl LaunchVerifier for ConsumerKeyPassthrough {
    fn name(&self) -> &str {
        "consumer-key-passthrough"
    }

    fn verify(&self, request: &LaunchRequest) -> Result<ConsumerToken, VerificationError> {
        Ok(ConsumerToken::new(request.consumer_key().unwrap_or_default()))
    }
}
