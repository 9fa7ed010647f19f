//! LTI Types - Data model for Basic LTI launches
//!
//! A Tool Consumer (a course platform) POSTs a set of launch parameters to
//! the Tool Provider. The provider maps the launch onto a hosted widget and
//! a per-user, per-context instance of it.
//!
//! ## Key Concepts
//!
//! - **LaunchRequest**: Immutable parameter map for a single launch
//! - **SessionKey**: Deterministic key scoping instances to a consumer context
//! - **InstanceKey**: The (consumer, user, session key, widget) four-tuple
//! - **Widget / WidgetInstance**: Catalog entry and its per-user runtime state
//! - **Participant**: Launching user as recorded against an instance
//! - **RoleSet**: The consumer's raw role list
//! - **params**: The fixed parameter and role vocabularies

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod ids;
pub mod params;
pub mod participant;
pub mod request;
pub mod roles;
pub mod widget;

// Re-export main types
pub use ids::{ConsumerToken, InstanceKey, SessionKey};
pub use participant::Participant;
pub use request::LaunchRequest;
pub use roles::RoleSet;
pub use widget::{Preference, Widget, WidgetInstance};
