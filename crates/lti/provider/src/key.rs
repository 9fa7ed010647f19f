//! Session key derivation
//!
//! The key scopes instance lookup to one consumer context of one widget. It is
//! a BLAKE3 digest over the length-prefixed triple, so inputs cannot bleed
//! into each other and an absent field never hashes like an empty one.

use lti_types::SessionKey;

const DOMAIN: &[u8] = b"lti-provider/session-key/v1";

/// Derive the internal session key for a launch.
///
/// Total and pure: absent inputs still produce a key. Rejecting launches with
/// absent required fields is the caller's job.
pub fn derive_session_key(
    consumer_token: Option<&str>,
    widget_guid: &str,
    resource_link_id: Option<&str>,
) -> SessionKey {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN);
    absorb(&mut hasher, consumer_token);
    absorb(&mut hasher, Some(widget_guid));
    absorb(&mut hasher, resource_link_id);
    SessionKey::new(hasher.finalize().to_hex().to_string())
}

fn absorb(hasher: &mut blake3::Hasher, field: Option<&str>) {
    match field {
        None => {
            hasher.update(&[0u8]);
        }
        Some(value) => {
            hasher.update(&[1u8]);
            hasher.update(&(value.len() as u64).to_le_bytes());
            hasher.update(value.as_bytes());
        }
    }
}
