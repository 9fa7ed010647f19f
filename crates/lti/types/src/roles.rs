//! The raw role list sent with a launch

use serde::{Deserialize, Serialize};

/// Roles as sent by the consumer, kept verbatim.
///
/// Matching is a case-insensitive substring test against the whole value, so
/// no attempt is made to split the list or parse role URNs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(String);

impl RoleSet {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Whether any of `roles` occurs in the list, ignoring case
    pub fn contains_any(&self, roles: &[&str]) -> bool {
        if self.0.is_empty() {
            return false;
        }
        let haystack: Vec<char> = self.0.chars().map(fold).collect();
        roles.iter().any(|role| {
            let needle: Vec<char> = role.chars().map(fold).collect();
            !needle.is_empty()
                && haystack
                    .windows(needle.len())
                    .any(|window| window == needle.as_slice())
        })
    }
}

impl From<Option<&str>> for RoleSet {
    fn from(raw: Option<&str>) -> Self {
        Self::new(raw.unwrap_or_default())
    }
}

/// Single-character case fold.
///
/// Multi-character lowercase expansions (`İ` → `i̇`) keep only their first
/// character so folding never shifts positions.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
