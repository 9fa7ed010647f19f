//! Strongly-typed keys for launch scoping
//!
//! Keys are opaque strings wrapped in newtypes so a session key cannot be
//! passed where a consumer token is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token naming the Tool Consumer a launch came from.
///
/// May be empty when the consumer sent no key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsumerToken(String);

impl ConsumerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConsumerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Internal session key derived from (consumer, widget, resource link)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a widget instance: one per consumer, user, context and widget
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceKey {
    pub consumer: ConsumerToken,
    pub user_id: String,
    pub session_key: SessionKey,
    pub widget_guid: String,
}

impl InstanceKey {
    pub fn new(
        consumer: ConsumerToken,
        user_id: impl Into<String>,
        session_key: SessionKey,
        widget_guid: impl Into<String>,
    ) -> Self {
        Self {
            consumer,
            user_id: user_id.into(),
            session_key,
            widget_guid: widget_guid.into(),
        }
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.consumer, self.user_id, self.session_key, self.widget_guid
        )
    }
}
