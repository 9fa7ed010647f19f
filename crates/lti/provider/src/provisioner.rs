//! Find-or-create of widget instances
//!
//! Lookup always runs before creation. Two concurrent launches for the same
//! four-tuple may both miss and both create; uniqueness is the persistence
//! layer's concern.

use crate::traits::{InstanceFactory, InstanceRepository, StorageResult};
use lti_types::{InstanceKey, WidgetInstance};
use std::sync::Arc;

/// Outcome of provisioning an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioned {
    /// An instance for the four-tuple already existed
    Found(WidgetInstance),

    /// The factory built a new instance
    Created(WidgetInstance),

    /// Neither lookup nor creation produced an instance
    Absent,
}

impl Provisioned {
    pub fn is_created(&self) -> bool {
        matches!(self, Provisioned::Created(_))
    }

    pub fn instance(&self) -> Option<&WidgetInstance> {
        match self {
            Provisioned::Found(instance) | Provisioned::Created(instance) => Some(instance),
            Provisioned::Absent => None,
        }
    }
}

/// Resolves or creates the instance for a launch
#[derive(Clone)]
pub struct InstanceProvisioner {
    repository: Arc<dyn InstanceRepository>,
    factory: Arc<dyn InstanceFactory>,
}

impl InstanceProvisioner {
    pub fn new(repository: Arc<dyn InstanceRepository>, factory: Arc<dyn InstanceFactory>) -> Self {
        Self {
            repository,
            factory,
        }
    }

    pub async fn provision(
        &self,
        key: &InstanceKey,
        locale: Option<&str>,
    ) -> StorageResult<Provisioned> {
        if let Some(instance) = self.repository.find_instance(key).await? {
            tracing::debug!(id_key = %instance.id_key, "Found existing instance");
            return Ok(Provisioned::Found(instance));
        }

        match self.factory.create_instance(key, locale).await? {
            Some(instance) => {
                tracing::info!(
                    id_key = %instance.id_key,
                    widget_guid = %key.widget_guid,
                    user_id = %key.user_id,
                    "Created widget instance"
                );
                Ok(Provisioned::Created(instance))
            }
            None => {
                tracing::warn!(widget_guid = %key.widget_guid, "Factory produced no instance");
                Ok(Provisioned::Absent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{chat_key, FakeBackend};

    fn provisioner(backend: &Arc<FakeBackend>) -> InstanceProvisioner {
        InstanceProvisioner::new(backend.clone(), backend.clone())
    }

    #[tokio::test]
    async fn test_creates_then_finds() {
        let backend = Arc::new(FakeBackend::with_chat_widget());
        let provisioner = provisioner(&backend);
        let key = chat_key("alice");

        let first = provisioner.provision(&key, Some("en")).await.unwrap();
        assert!(first.is_created());
        assert_eq!(first.instance().unwrap().locale.as_deref(), Some("en"));

        let second = provisioner.provision(&key, Some("en")).await.unwrap();
        assert!(matches!(second, Provisioned::Found(_)));
        assert_eq!(
            first.instance().unwrap().id_key,
            second.instance().unwrap().id_key
        );
        assert_eq!(backend.instance_count(), 1);
    }

    #[tokio::test]
    async fn test_distinct_users_get_distinct_instances() {
        let backend = Arc::new(FakeBackend::with_chat_widget());
        let provisioner = provisioner(&backend);

        provisioner.provision(&chat_key("alice"), None).await.unwrap();
        let bob = provisioner.provision(&chat_key("bob"), None).await.unwrap();
        assert!(bob.is_created());
        assert_eq!(backend.instance_count(), 2);
    }

    #[tokio::test]
    async fn test_unusable_widget_is_absent() {
        let backend = Arc::new(FakeBackend::with_chat_widget());
        let provisioner = provisioner(&backend);
        let mut key = chat_key("alice");
        key.widget_guid = "http://widgets.example.org/broken".to_string();

        let result = provisioner.provision(&key, None).await.unwrap();
        assert_eq!(result, Provisioned::Absent);
        assert!(result.instance().is_none());
    }
}
