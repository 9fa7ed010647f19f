//! Widgets, widget instances and their preferences

use crate::ids::InstanceKey;
use serde::{Deserialize, Serialize};

/// A key/value preference on a widget instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub key: String,
    pub value: String,
}

impl Preference {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A hosted widget as known to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    /// External identifier, as used in the launch path
    pub id: String,

    /// Canonical internal identifier (IRI)
    pub guid: String,

    /// Human-readable title
    pub name: String,

    /// Start page the instance URL is built from
    pub start_url: String,

    /// Preferences the widget declares, with their default values
    #[serde(default)]
    pub preferences: Vec<Preference>,
}

/// A per-(consumer, user, context, widget) runtime instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInstance {
    /// Opaque handle the running widget uses to address its state
    pub id_key: String,

    /// Identity four-tuple; never changed after creation
    pub key: InstanceKey,

    /// Start page of the widget this instance runs
    pub start_url: String,

    /// Locale the instance was created for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Current preference set; its keys are the declared-supported ones
    #[serde(default)]
    pub preferences: Vec<Preference>,
}

impl WidgetInstance {
    /// Whether the instance exposes a preference with this key
    pub fn declares_preference(&self, key: &str) -> bool {
        self.preferences.iter().any(|p| p.key == key)
    }

    pub fn preference(&self, key: &str) -> Option<&str> {
        self.preferences
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}
