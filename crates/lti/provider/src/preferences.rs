//! Projection of launch parameters into instance preferences
//!
//! Only whitelisted parameters are considered, and only preference keys the
//! instance already declares are written. Nothing here creates a key.

use crate::traits::{PreferenceStore, StorageResult};
use lti_types::params::{MODERATOR_PREFERENCE, PREFERENCE_PARAMETERS};
use lti_types::{LaunchRequest, WidgetInstance};
use std::sync::Arc;

#[derive(Clone)]
pub struct PreferenceProjector {
    store: Arc<dyn PreferenceStore>,
}

impl PreferenceProjector {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Write `key = value` if the instance declares `key`.
    ///
    /// Returns whether a write happened. The instance handle is kept in step
    /// with the store.
    pub async fn set_if_declared(
        &self,
        instance: &mut WidgetInstance,
        key: &str,
        value: &str,
    ) -> StorageResult<bool> {
        if !instance.declares_preference(key) {
            return Ok(false);
        }
        self.store.update_preference(instance, key, value).await?;
        for pref in instance.preferences.iter_mut().filter(|p| p.key == key) {
            pref.value = value.to_string();
        }
        Ok(true)
    }

    /// Copy every whitelisted parameter present in the request.
    ///
    /// Returns the keys that were written.
    pub async fn project(
        &self,
        instance: &mut WidgetInstance,
        request: &LaunchRequest,
    ) -> StorageResult<Vec<&'static str>> {
        let mut written = Vec::new();
        for name in PREFERENCE_PARAMETERS {
            let Some(value) = request.get(name) else {
                continue;
            };
            if self.set_if_declared(instance, name, value).await? {
                written.push(name);
            }
        }
        tracing::debug!(id_key = %instance.id_key, written = ?written, "Projected launch preferences");
        Ok(written)
    }

    /// Grant moderator status through the `moderator` preference.
    ///
    /// Never revokes; a widget that does not declare the preference is left
    /// untouched.
    pub async fn elevate(&self, instance: &mut WidgetInstance) -> StorageResult<bool> {
        let granted = self.set_if_declared(instance, MODERATOR_PREFERENCE, "true").await?;
        if !granted {
            tracing::debug!(id_key = %instance.id_key, "Widget does not declare a moderator preference");
        }
        Ok(granted)
    }
}
