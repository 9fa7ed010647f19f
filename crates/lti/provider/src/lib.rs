//! LTI Provider - Basic LTI tool provider launch pipeline
//!
//! Takes a launch from a Tool Consumer and turns it into a redirect to a
//! running widget instance:
//!
//! 1. Resolve the widget named in the launch path
//! 2. Derive the session key for the consumer context
//! 3. Find or create the per-user instance
//! 4. Register the participant and grant moderator status from roles
//! 5. Project whitelisted launch parameters into declared preferences
//! 6. Redirect to the instance, or back to the consumer on failure
//!
//! Persistence, instance construction and URL building are collaborators
//! supplied through [`Collaborators`].

#![deny(unsafe_code)]

pub mod error;
pub mod key;
pub mod participant;
pub mod pipeline;
pub mod preferences;
pub mod provisioner;
pub mod resolver;
pub mod responder;
pub mod roles;
pub mod traits;
pub mod verify;

#[cfg(test)]
mod testing;

pub use error::{LaunchError, LaunchResult, StorageError, UrlError, VerificationError};
pub use key::derive_session_key;
pub use participant::{participant_from_request, ParticipantRegistrar};
pub use pipeline::{LaunchOutcome, LaunchPipeline};
pub use preferences::PreferenceProjector;
pub use provisioner::{InstanceProvisioner, Provisioned};
pub use resolver::WidgetResolver;
pub use responder::{LaunchResponder, LaunchResponse, LaunchStatus};
pub use roles::is_moderator;
pub use traits::{
    Collaborators, InstanceFactory, InstanceRepository, InstanceUrlBuilder, ParticipantRegistry,
    PreferenceStore, StorageResult, WidgetCatalog,
};
pub use verify::{ConsumerKeyPassthrough, LaunchVerifier};
