//! The launch pipeline
//!
//! One pass per request, no retries:
//!
//! verify → resolve widget → derive key → validate → provision →
//! register participant → evaluate roles → elevate → project → respond
//!
//! Each collaborator call completes before the next begins; lookup always
//! precedes creation.

use crate::error::{LaunchError, LaunchResult};
use crate::key::derive_session_key;
use crate::participant::ParticipantRegistrar;
use crate::preferences::PreferenceProjector;
use crate::provisioner::{InstanceProvisioner, Provisioned};
use crate::resolver::WidgetResolver;
use crate::responder::{LaunchResponder, LaunchResponse, LaunchStatus};
use crate::roles::is_moderator;
use crate::traits::Collaborators;
use crate::verify::{ConsumerKeyPassthrough, LaunchVerifier};
use lti_types::params::{RESOURCE_LINK_ID, USER_ID};
use lti_types::{InstanceKey, LaunchRequest, Participant, WidgetInstance};
use std::sync::Arc;

/// Name reported when the launch path carries no widget segment
pub const WIDGET_ID: &str = "widget_id";

/// Result of a successful launch
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub status: LaunchStatus,
    pub location: String,
    pub instance: WidgetInstance,
    pub participant: Participant,
    pub moderator: bool,
    pub projected: Vec<&'static str>,
}

impl LaunchOutcome {
    pub fn into_response(self) -> LaunchResponse {
        LaunchResponse::Redirect {
            status: self.status,
            location: self.location,
        }
    }
}

#[derive(Clone)]
pub struct LaunchPipeline {
    verifier: Arc<dyn LaunchVerifier>,
    resolver: WidgetResolver,
    provisioner: InstanceProvisioner,
    registrar: ParticipantRegistrar,
    projector: PreferenceProjector,
    responder: LaunchResponder,
}

impl LaunchPipeline {
    /// Pipeline over the given collaborators, trusting the consumer key as-is
    pub fn new(collaborators: Collaborators) -> Self {
        let Collaborators {
            catalog,
            instances,
            factory,
            participants,
            preferences,
            urls,
        } = collaborators;
        Self {
            verifier: Arc::new(ConsumerKeyPassthrough),
            resolver: WidgetResolver::new(catalog),
            provisioner: InstanceProvisioner::new(instances, factory),
            registrar: ParticipantRegistrar::new(participants),
            projector: PreferenceProjector::new(preferences),
            responder: LaunchResponder::new(urls),
        }
    }

    /// Replace the verification step
    pub fn with_verifier(mut self, verifier: Arc<dyn LaunchVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn verifier_name(&self) -> &str {
        self.verifier.name()
    }

    /// Handle one launch, turning any failure into the fallback response
    pub async fn launch(&self, widget_id: Option<&str>, request: &LaunchRequest) -> LaunchResponse {
        match self.run(widget_id, request).await {
            Ok(outcome) => {
                tracing::info!(
                    widget_id = widget_id.unwrap_or_default(),
                    user_id = %outcome.instance.key.user_id,
                    id_key = %outcome.instance.id_key,
                    status = outcome.status.code(),
                    moderator = outcome.moderator,
                    "Launch succeeded"
                );
                outcome.into_response()
            }
            Err(err) => self.reject(widget_id, &err, request),
        }
    }

    /// Answer a launch that failed before or during the pipeline
    pub fn reject(
        &self,
        widget_id: Option<&str>,
        err: &LaunchError,
        request: &LaunchRequest,
    ) -> LaunchResponse {
        let response = LaunchResponder::failure(err, request);
        tracing::warn!(
            widget_id = widget_id.unwrap_or_default(),
            code = err.code(),
            status = response.status_code(),
            fallback = response.location().is_some(),
            error = %err,
            "Launch failed"
        );
        response
    }

    /// Run the pipeline, surfacing the terminal error if any
    pub async fn run(
        &self,
        widget_id: Option<&str>,
        request: &LaunchRequest,
    ) -> LaunchResult<LaunchOutcome> {
        let consumer = self.verifier.verify(request)?;

        let widget_guid = match widget_id {
            Some(id) => Some(self.resolver.resolve(id).await?),
            None => None,
        };

        let session_key = widget_guid
            .as_ref()
            .and_then(|guid| guid.as_deref())
            .map(|guid| {
                derive_session_key(Some(consumer.as_str()), guid, request.resource_link_id())
            });

        // Required fields are checked together, before any instance lookup
        let user_id = request
            .user_id()
            .ok_or(LaunchError::MissingRequiredParameter(USER_ID))?;
        if request.resource_link_id().is_none() {
            return Err(LaunchError::MissingRequiredParameter(RESOURCE_LINK_ID));
        }
        let Some(widget_guid) = widget_guid else {
            return Err(LaunchError::MissingRequiredParameter(WIDGET_ID));
        };
        let (Some(guid), Some(session_key)) = (widget_guid, session_key) else {
            return Err(LaunchError::WidgetOrInstanceNotFound(format!(
                "widget '{}'",
                widget_id.unwrap_or_default()
            )));
        };
        let key = InstanceKey::new(consumer, user_id, session_key, guid);
        tracing::debug!(session_key = %key.session_key, instance_key = %key, "Launch validated");

        let provisioned = self.provisioner.provision(&key, request.locale()).await?;
        let (mut instance, status) = match provisioned {
            Provisioned::Found(instance) => (instance, LaunchStatus::Found),
            Provisioned::Created(instance) => (instance, LaunchStatus::Created),
            Provisioned::Absent => {
                return Err(LaunchError::WidgetOrInstanceNotFound(format!(
                    "no instance for widget {}",
                    key.widget_guid
                )))
            }
        };

        let participant = self.registrar.register(&instance, user_id, request).await?;

        let moderator = is_moderator(request.roles());
        if moderator {
            self.projector.elevate(&mut instance).await?;
        }

        let projected = self.projector.project(&mut instance, request).await?;

        let location = self.responder.instance_location(&instance)?;

        Ok(LaunchOutcome {
            status,
            location,
            instance,
            participant,
            moderator,
            projected,
        })
    }
}
