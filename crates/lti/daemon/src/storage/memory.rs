//! In-memory storage implementation

use super::traits::{InstanceListing, InstanceRecord, LaunchBackend};
use async_trait::async_trait;
use lti_provider::{
    InstanceFactory, InstanceRepository, ParticipantRegistry, PreferenceStore, StorageError,
    StorageResult, WidgetCatalog,
};
use lti_types::{InstanceKey, Participant, Widget, WidgetInstance};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory storage for development and testing.
///
/// Instances are unique per four-tuple: a create racing another create for
/// the same key returns the instance that won.
#[derive(Debug)]
pub struct InMemoryStorage {
    widgets: Arc<RwLock<HashMap<String, Widget>>>,
    instances: Arc<RwLock<HashMap<InstanceKey, WidgetInstance>>>,
    participants: Arc<RwLock<HashMap<String, Vec<Participant>>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            widgets: Arc::new(RwLock::new(HashMap::new())),
            instances: Arc::new(RwLock::new(HashMap::new())),
            participants: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create storage with a seeded widget catalog
    pub async fn with_widgets(widgets: impl IntoIterator<Item = Widget>) -> Self {
        let storage = Self::new();
        for widget in widgets {
            storage.upsert_widget(widget).await;
        }
        storage
    }

    /// Add or replace a catalog widget
    pub async fn upsert_widget(&self, widget: Widget) {
        let mut widgets = self.widgets.write().await;
        tracing::debug!(widget_id = %widget.id, guid = %widget.guid, "Registered widget");
        widgets.insert(widget.id.clone(), widget);
    }

    async fn record(&self, instance: WidgetInstance) -> InstanceRecord {
        let participants = self.participants.read().await;
        InstanceRecord {
            participants: participants
                .get(&instance.id_key)
                .cloned()
                .unwrap_or_default(),
            instance,
        }
    }
}

#[async_trait]
impl WidgetCatalog for InMemoryStorage {
    async fn find_widget(&self, external_id: &str) -> StorageResult<Option<Widget>> {
        let widgets = self.widgets.read().await;
        Ok(widgets.get(external_id).cloned())
    }
}

#[async_trait]
impl InstanceRepository for InMemoryStorage {
    async fn find_instance(&self, key: &InstanceKey) -> StorageResult<Option<WidgetInstance>> {
        let instances = self.instances.read().await;
        Ok(instances.get(key).cloned())
    }
}

#[async_trait]
impl InstanceFactory for InMemoryStorage {
    async fn create_instance(
        &self,
        key: &InstanceKey,
        locale: Option<&str>,
    ) -> StorageResult<Option<WidgetInstance>> {
        let widget = {
            let widgets = self.widgets.read().await;
            widgets.values().find(|w| w.guid == key.widget_guid).cloned()
        };
        let Some(widget) = widget else {
            return Ok(None);
        };

        let mut instances = self.instances.write().await;
        let instance = instances
            .entry(key.clone())
            .or_insert_with(|| WidgetInstance {
                id_key: Uuid::new_v4().simple().to_string(),
                key: key.clone(),
                start_url: widget.start_url,
                locale: locale.map(str::to_string),
                preferences: widget.preferences,
            });
        Ok(Some(instance.clone()))
    }
}

#[async_trait]
impl ParticipantRegistry for InMemoryStorage {
    async fn add_participant(
        &self,
        instance: &WidgetInstance,
        participant: Participant,
    ) -> StorageResult<()> {
        let mut participants = self.participants.write().await;
        let entries = participants.entry(instance.id_key.clone()).or_default();
        match entries.iter_mut().find(|p| p.user_id == participant.user_id) {
            Some(existing) => *existing = participant,
            None => entries.push(participant),
        }
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for InMemoryStorage {
    async fn update_preference(
        &self,
        instance: &WidgetInstance,
        key: &str,
        value: &str,
    ) -> StorageResult<()> {
        let mut instances = self.instances.write().await;
        let stored = instances
            .get_mut(&instance.key)
            .ok_or_else(|| StorageError::NotFound(format!("Instance {} not found", instance.id_key)))?;
        let pref = stored
            .preferences
            .iter_mut()
            .find(|p| p.key == key)
            .ok_or_else(|| {
                StorageError::InvalidData(format!(
                    "Instance {} does not declare preference {}",
                    instance.id_key, key
                ))
            })?;
        pref.value = value.to_string();
        Ok(())
    }
}

#[async_trait]
impl InstanceListing for InMemoryStorage {
    async fn list_instances(&self) -> StorageResult<Vec<InstanceRecord>> {
        let instances: Vec<WidgetInstance> = {
            let instances = self.instances.read().await;
            instances.values().cloned().collect()
        };
        let mut records = Vec::with_capacity(instances.len());
        for instance in instances {
            records.push(self.record(instance).await);
        }
        records.sort_by(|a, b| a.instance.id_key.cmp(&b.instance.id_key));
        Ok(records)
    }

    async fn get_instance(&self, id_key: &str) -> StorageResult<Option<InstanceRecord>> {
        let instance = {
            let instances = self.instances.read().await;
            instances.values().find(|i| i.id_key == id_key).cloned()
        };
        match instance {
            Some(instance) => Ok(Some(self.record(instance).await)),
            None => Ok(None),
        }
    }
}

impl LaunchBackend for InMemoryStorage {}

#[cfg(test)]
mod tests {
    use super::*;
    use lti_types::{ConsumerToken, Preference, SessionKey};

    fn create_test_widget() -> Widget {
        Widget {
            id: "chat".to_string(),
            guid: "http://widgets.example.org/chat".to_string(),
            name: "Chat".to_string(),
            start_url: "widgets/chat/index.html".to_string(),
            preferences: vec![Preference::new("moderator", "false")],
        }
    }

    fn create_test_key(user_id: &str) -> InstanceKey {
        InstanceKey::new(
            ConsumerToken::new("lms.example.edu"),
            user_id,
            SessionKey::new("session-1"),
            "http://widgets.example.org/chat",
        )
    }

    #[tokio::test]
    async fn test_catalog_lookup() {
        let storage = InMemoryStorage::with_widgets([create_test_widget()]).await;

        let found = storage.find_widget("chat").await.unwrap();
        assert_eq!(found.unwrap().guid, "http://widgets.example.org/chat");

        assert!(storage.find_widget("poll").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_and_find_instance() {
        let storage = InMemoryStorage::with_widgets([create_test_widget()]).await;
        let key = create_test_key("alice");

        assert!(storage.find_instance(&key).await.unwrap().is_none());

        let created = storage.create_instance(&key, Some("fr")).await.unwrap().unwrap();
        assert_eq!(created.locale.as_deref(), Some("fr"));
        assert!(created.declares_preference("moderator"));

        let found = storage.find_instance(&key).await.unwrap().unwrap();
        assert_eq!(found.id_key, created.id_key);
    }

    #[tokio::test]
    async fn test_create_is_unique_per_key() {
        let storage = InMemoryStorage::with_widgets([create_test_widget()]).await;
        let key = create_test_key("alice");

        let first = storage.create_instance(&key, None).await.unwrap().unwrap();
        let second = storage.create_instance(&key, None).await.unwrap().unwrap();
        assert_eq!(first.id_key, second.id_key);
        assert_eq!(storage.list_instances().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_unknown_guid_is_none() {
        let storage = InMemoryStorage::new();
        let created = storage
            .create_instance(&create_test_key("alice"), None)
            .await
            .unwrap();
        assert!(created.is_none());
    }

    #[tokio::test]
    async fn test_participants_replace_by_user() {
        let storage = InMemoryStorage::with_widgets([create_test_widget()]).await;
        let instance = storage
            .create_instance(&create_test_key("alice"), None)
            .await
            .unwrap()
            .unwrap();

        storage
            .add_participant(&instance, Participant::new("alice", "unknown"))
            .await
            .unwrap();
        storage
            .add_participant(&instance, Participant::new("alice", "Alice Liddell"))
            .await
            .unwrap();

        let record = storage.get_instance(&instance.id_key).await.unwrap().unwrap();
        assert_eq!(record.participants.len(), 1);
        assert_eq!(record.participants[0].display_name, "Alice Liddell");
    }

    #[tokio::test]
    async fn test_update_preference() {
        let storage = InMemoryStorage::with_widgets([create_test_widget()]).await;
        let key = create_test_key("alice");
        let instance = storage.create_instance(&key, None).await.unwrap().unwrap();

        storage
            .update_preference(&instance, "moderator", "true")
            .await
            .unwrap();
        let stored = storage.find_instance(&key).await.unwrap().unwrap();
        assert_eq!(stored.preference("moderator"), Some("true"));

        let err = storage
            .update_preference(&instance, "context_title", "Physics")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }
}
