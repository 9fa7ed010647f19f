//! Participant registration

use crate::traits::{ParticipantRegistry, StorageResult};
use lti_types::params::{LIS_PERSON_NAME_FULL, UNKNOWN_PARTICIPANT_NAME, USER_IMAGE};
use lti_types::{LaunchRequest, Participant, WidgetInstance};
use std::sync::Arc;

/// Build the participant record for the launching user.
///
/// NOTE: `user_image` overwrites the display name rather than filling the
/// thumbnail, and the thumbnail is always `None`. Left as-is until the
/// mapping is confirmed with product.
pub fn participant_from_request(user_id: &str, request: &LaunchRequest) -> Participant {
    let mut name = UNKNOWN_PARTICIPANT_NAME;
    if let Some(full_name) = request.get(LIS_PERSON_NAME_FULL) {
        name = full_name;
    }
    if let Some(image) = request.get(USER_IMAGE) {
        name = image;
    }
    Participant::new(user_id, name)
}

#[derive(Clone)]
pub struct ParticipantRegistrar {
    registry: Arc<dyn ParticipantRegistry>,
}

impl ParticipantRegistrar {
    pub fn new(registry: Arc<dyn ParticipantRegistry>) -> Self {
        Self { registry }
    }

    /// Record the launching user against the instance
    pub async fn register(
        &self,
        instance: &WidgetInstance,
        user_id: &str,
        request: &LaunchRequest,
    ) -> StorageResult<Participant> {
        let participant = participant_from_request(user_id, request);
        self.registry
            .add_participant(instance, participant.clone())
            .await?;
        tracing::debug!(
            id_key = %instance.id_key,
            user_id = %user_id,
            display_name = %participant.display_name,
            "Registered participant"
        );
        Ok(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{chat_instance, FakeBackend};

    #[test]
    fn test_defaults_to_unknown() {
        let participant = participant_from_request("alice", &LaunchRequest::default());
        assert_eq!(participant.display_name, "unknown");
        assert!(participant.thumbnail.is_none());
    }

    #[test]
    fn test_uses_full_name() {
        let request = LaunchRequest::from_pairs([("lis_person_name_full", "Alice Liddell")]);
        let participant = participant_from_request("alice", &request);
        assert_eq!(participant.user_id, "alice");
        assert_eq!(participant.display_name, "Alice Liddell");
    }

    #[test]
    fn test_user_image_overwrites_name() {
        let request = LaunchRequest::from_pairs([
            ("lis_person_name_full", "Alice Liddell"),
            ("user_image", "https://lms.example.edu/avatars/alice.png"),
        ]);
        let participant = participant_from_request("alice", &request);
        assert_eq!(
            participant.display_name,
            "https://lms.example.edu/avatars/alice.png"
        );
        assert!(participant.thumbnail.is_none());
    }

    #[tokio::test]
    async fn test_register_writes_to_registry() {
        let backend = Arc::new(FakeBackend::default());
        let registrar = ParticipantRegistrar::new(backend.clone());
        let instance = chat_instance(vec![]);
        let request = LaunchRequest::from_pairs([("lis_person_name_full", "Alice Liddell")]);

        registrar.register(&instance, "alice", &request).await.unwrap();
        let recorded = backend.participants();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].display_name, "Alice Liddell");
    }
}
