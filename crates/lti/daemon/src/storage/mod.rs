//! Storage layer for lti-daemon
//!
//! Backs every launch collaborator: widget catalog, instances, participants
//! and preferences.

mod memory;
mod traits;

pub use memory::InMemoryStorage;
pub use traits::{InstanceListing, InstanceRecord, LaunchBackend};
