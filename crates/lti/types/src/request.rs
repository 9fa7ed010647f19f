//! Launch request parameters
//!
//! A LaunchRequest is built once per inbound launch and never mutated. When a
//! parameter name appears more than once the first occurrence wins.

use crate::params;
use serde::Serialize;
use std::collections::BTreeMap;

/// Immutable mapping from launch parameter name to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchRequest {
    params: BTreeMap<String, String>,
}

impl LaunchRequest {
    /// Build a request from name/value pairs, keeping the first value per name
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = BTreeMap::new();
        for (name, value) in pairs {
            params.entry(name.into()).or_insert_with(|| value.into());
        }
        Self { params }
    }

    /// Raw parameter value, if present (may be empty)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Parameter value if present and not blank
    pub fn get_non_blank(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.trim().is_empty())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.get_non_blank(params::USER_ID)
    }

    pub fn resource_link_id(&self) -> Option<&str> {
        self.get_non_blank(params::RESOURCE_LINK_ID)
    }

    pub fn consumer_key(&self) -> Option<&str> {
        self.get(params::OAUTH_CONSUMER_KEY)
    }

    pub fn locale(&self) -> Option<&str> {
        self.get_non_blank(params::LAUNCH_PRESENTATION_LOCALE)
    }

    pub fn roles(&self) -> Option<&str> {
        self.get(params::ROLES)
    }

    /// Consumer-declared fallback URL, trimmed.
    ///
    /// `None` when absent, blank, or carrying a control character, since such
    /// a value cannot be sent back as a redirect target.
    pub fn return_url(&self) -> Option<&str> {
        self.get(params::LAUNCH_PRESENTATION_RETURN_URL)
            .map(str::trim)
            .filter(|url| !url.is_empty() && !url.chars().any(char::is_control))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LaunchRequest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
