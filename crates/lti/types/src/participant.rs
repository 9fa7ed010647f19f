//! Participant records

use serde::{Deserialize, Serialize};

/// A user taking part in a widget instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Consumer-side user id
    pub user_id: String,

    /// Best-effort display name
    pub display_name: String,

    /// Avatar URL; launches never populate it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Participant {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            thumbnail: None,
        }
    }
}
