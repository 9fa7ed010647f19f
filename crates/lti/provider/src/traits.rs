//! Collaborator traits
//!
//! The pipeline never reaches persistence directly; every external system is
//! handed in as one of these traits.

use crate::error::{StorageError, UrlError};
use async_trait::async_trait;
use lti_types::{InstanceKey, Participant, Widget, WidgetInstance};
use std::sync::Arc;

/// Result type for collaborator operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Widget lookup by external identifier
#[async_trait]
pub trait WidgetCatalog: Send + Sync {
    /// Find a widget by the id used in launch paths
    async fn find_widget(&self, external_id: &str) -> StorageResult<Option<Widget>>;
}

/// Lookup of existing widget instances
#[async_trait]
pub trait InstanceRepository: Send + Sync {
    /// Find the instance for an exact four-tuple
    async fn find_instance(&self, key: &InstanceKey) -> StorageResult<Option<WidgetInstance>>;
}

/// Construction of new widget instances.
///
/// Returns `None` when the widget cannot be instantiated.
#[async_trait]
pub trait InstanceFactory: Send + Sync {
    async fn create_instance(
        &self,
        key: &InstanceKey,
        locale: Option<&str>,
    ) -> StorageResult<Option<WidgetInstance>>;
}

/// Participant writes
#[async_trait]
pub trait ParticipantRegistry: Send + Sync {
    async fn add_participant(
        &self,
        instance: &WidgetInstance,
        participant: Participant,
    ) -> StorageResult<()>;
}

/// Preference writes.
///
/// Callers only invoke this for keys the instance already declares.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn update_preference(
        &self,
        instance: &WidgetInstance,
        key: &str,
        value: &str,
    ) -> StorageResult<()>;
}

/// Builds the externally reachable URL of an instance
pub trait InstanceUrlBuilder: Send + Sync {
    fn instance_url(&self, instance: &WidgetInstance) -> Result<String, UrlError>;
}

/// Every collaborator the pipeline needs
#[derive(Clone)]
pub struct Collaborators {
    pub catalog: Arc<dyn WidgetCatalog>,
    pub instances: Arc<dyn InstanceRepository>,
    pub factory: Arc<dyn InstanceFactory>,
    pub participants: Arc<dyn ParticipantRegistry>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub urls: Arc<dyn InstanceUrlBuilder>,
}

impl Collaborators {
    /// Use one backend for every persistence concern
    pub fn from_backend<B>(backend: Arc<B>, urls: Arc<dyn InstanceUrlBuilder>) -> Self
    where
        B: WidgetCatalog
            + InstanceRepository
            + InstanceFactory
            + ParticipantRegistry
            + PreferenceStore
            + 'static,
    {
        Self {
            catalog: backend.clone(),
            instances: backend.clone(),
            factory: backend.clone(),
            participants: backend.clone(),
            preferences: backend,
            urls,
        }
    }
}
