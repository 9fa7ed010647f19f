//! In-process fakes for pipeline tests

use crate::error::{StorageError, UrlError};
use crate::traits::{
    InstanceFactory, InstanceRepository, InstanceUrlBuilder, ParticipantRegistry,
    PreferenceStore, StorageResult, WidgetCatalog,
};
use async_trait::async_trait;
use lti_types::{
    ConsumerToken, InstanceKey, Participant, Preference, SessionKey, Widget, WidgetInstance,
};
use std::sync::Mutex;

pub const CHAT_GUID: &str = "http://widgets.example.org/chat";

#[derive(Default)]
pub struct FakeBackend {
    widgets: Mutex<Vec<Widget>>,
    instances: Mutex<Vec<WidgetInstance>>,
    participants: Mutex<Vec<Participant>>,
    preference_writes: Mutex<Vec<(String, String)>>,
    unbuildable: Mutex<Vec<String>>,
    fail_lookups: bool,
}

impl FakeBackend {
    pub fn with_chat_widget() -> Self {
        let backend = Self::default();
        backend.add_widget(Widget {
            id: "chat".to_string(),
            guid: CHAT_GUID.to_string(),
            name: "Chat".to_string(),
            start_url: "http://localhost:8080/widgets/chat/index.html".to_string(),
            preferences: vec![
                Preference::new("moderator", "false"),
                Preference::new("context_title", ""),
                Preference::new("lis_person_name_full", ""),
            ],
        });
        backend
    }

    pub fn failing() -> Self {
        Self {
            fail_lookups: true,
            ..Self::with_chat_widget()
        }
    }

    pub fn add_widget(&self, widget: Widget) {
        self.widgets.lock().unwrap().push(widget);
    }

    /// Make the factory refuse to build instances of this guid
    pub fn mark_unbuildable(&self, guid: &str) {
        self.unbuildable.lock().unwrap().push(guid.to_string());
    }

    pub fn instance_count(&self) -> usize {
        self.instances.lock().unwrap().len()
    }

    pub fn participants(&self) -> Vec<Participant> {
        self.participants.lock().unwrap().clone()
    }

    pub fn preference_writes(&self) -> Vec<(String, String)> {
        self.preference_writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl WidgetCatalog for FakeBackend {
    async fn find_widget(&self, external_id: &str) -> StorageResult<Option<Widget>> {
        let widgets = self.widgets.lock().unwrap();
        Ok(widgets.iter().find(|w| w.id == external_id).cloned())
    }
}

#[async_trait]
impl InstanceRepository for FakeBackend {
    async fn find_instance(&self, key: &InstanceKey) -> StorageResult<Option<WidgetInstance>> {
        if self.fail_lookups {
            return Err(StorageError::Connection("instance store offline".into()));
        }
        let instances = self.instances.lock().unwrap();
        Ok(instances.iter().find(|i| &i.key == key).cloned())
    }
}

#[async_trait]
impl InstanceFactory for FakeBackend {
    async fn create_instance(
        &self,
        key: &InstanceKey,
        locale: Option<&str>,
    ) -> StorageResult<Option<WidgetInstance>> {
        if self.unbuildable.lock().unwrap().contains(&key.widget_guid) {
            return Ok(None);
        }
        let widget = {
            let widgets = self.widgets.lock().unwrap();
            widgets.iter().find(|w| w.guid == key.widget_guid).cloned()
        };
        let Some(widget) = widget else {
            return Ok(None);
        };
        let mut instances = self.instances.lock().unwrap();
        let instance = WidgetInstance {
            id_key: format!("idk-{}", instances.len() + 1),
            key: key.clone(),
            start_url: widget.start_url,
            locale: locale.map(str::to_string),
            preferences: widget.preferences,
        };
        instances.push(instance.clone());
        Ok(Some(instance))
    }
}

#[async_trait]
impl ParticipantRegistry for FakeBackend {
    async fn add_participant(
        &self,
        _instance: &WidgetInstance,
        participant: Participant,
    ) -> StorageResult<()> {
        self.participants.lock().unwrap().push(participant);
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FakeBackend {
    async fn update_preference(
        &self,
        instance: &WidgetInstance,
        key: &str,
        value: &str,
    ) -> StorageResult<()> {
        self.preference_writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        let mut instances = self.instances.lock().unwrap();
        if let Some(stored) = instances.iter_mut().find(|i| i.id_key == instance.id_key) {
            for pref in stored.preferences.iter_mut().filter(|p| p.key == key) {
                pref.value = value.to_string();
            }
        }
        Ok(())
    }
}

/// Builds `start?idkey=..&amp;locale=..`, escaped the way HTML-oriented
/// builders do
pub struct FakeUrls;

impl InstanceUrlBuilder for FakeUrls {
    fn instance_url(&self, instance: &WidgetInstance) -> Result<String, UrlError> {
        Ok(format!(
            "{}?idkey={}&amp;locale={}",
            instance.start_url,
            instance.id_key,
            instance.locale.as_deref().unwrap_or_default()
        ))
    }
}

pub struct FailingUrls;

impl InstanceUrlBuilder for FailingUrls {
    fn instance_url(&self, instance: &WidgetInstance) -> Result<String, UrlError> {
        Err(UrlError::MissingStartUrl(instance.id_key.clone()))
    }
}

pub fn chat_key(user_id: &str) -> InstanceKey {
    InstanceKey::new(
        ConsumerToken::new("lms.example.edu"),
        user_id,
        SessionKey::new("session-1"),
        CHAT_GUID,
    )
}

pub fn chat_instance(preferences: Vec<Preference>) -> WidgetInstance {
    WidgetInstance {
        id_key: "idk-1".to_string(),
        key: chat_key("alice"),
        start_url: "http://localhost:8080/widgets/chat/index.html".to_string(),
        locale: Some("en".to_string()),
        preferences,
    }
}
