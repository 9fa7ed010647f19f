//! Storage trait definitions

use async_trait::async_trait;
use lti_provider::{
    InstanceFactory, InstanceRepository, ParticipantRegistry, PreferenceStore, StorageResult,
    WidgetCatalog,
};
use lti_types::{Participant, WidgetInstance};
use serde::Serialize;

/// Combined storage trait
#[async_trait]
pub trait LaunchBackend:
    WidgetCatalog
    + InstanceRepository
    + InstanceFactory
    + ParticipantRegistry
    + PreferenceStore
    + InstanceListing
    + Send
    + Sync
{
}

/// An instance together with its participants
#[derive(Debug, Clone, Serialize)]
pub struct InstanceRecord {
    pub instance: WidgetInstance,
    pub participants: Vec<Participant>,
}

/// Read access for diagnostics
#[async_trait]
pub trait InstanceListing: Send + Sync {
    /// List all instances
    async fn list_instances(&self) -> StorageResult<Vec<InstanceRecord>>;

    /// Get an instance by its id key
    async fn get_instance(&self, id_key: &str) -> StorageResult<Option<InstanceRecord>>;
}
