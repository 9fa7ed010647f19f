//! Launch parameter names and fixed vocabularies
//!
//! The whitelist policy lives here in one place: which roles grant moderator
//! status and which launch parameters may be projected into preferences.

/// Launching user identity (required)
pub const USER_ID: &str = "user_id";

/// Consumer-side context instance id, fed into session key derivation (required)
pub const RESOURCE_LINK_ID: &str = "resource_link_id";

/// Consumer key, used only as an opaque namespacing token
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";

/// Locale hint passed to instance creation
pub const LAUNCH_PRESENTATION_LOCALE: &str = "launch_presentation_locale";

/// Comma separated role list
pub const ROLES: &str = "roles";

/// Where to send the browser when the launch fails
pub const LAUNCH_PRESENTATION_RETURN_URL: &str = "launch_presentation_return_url";

/// Full display name of the launching user
pub const LIS_PERSON_NAME_FULL: &str = "lis_person_name_full";

/// Avatar URL of the launching user
pub const USER_IMAGE: &str = "user_image";

/// Preference written when the launching user holds a moderator role
pub const MODERATOR_PREFERENCE: &str = "moderator";

/// Display name used when the consumer supplies none
pub const UNKNOWN_PARTICIPANT_NAME: &str = "unknown";

/// Roles that grant moderator status, matched case-insensitively as substrings
pub const MODERATOR_ROLES: [&str; 7] = [
    "instructor",
    "moderator",
    "teachingassistant",
    "administrator",
    "mentor",
    "manager",
    "content developer",
];

/// Launch parameters copied into instance preferences when the widget declares them
pub const PREFERENCE_PARAMETERS: [&str; 13] = [
    "launch_presentation_document_target",
    "tool_consumer_instance_name",
    "tool_consumer_instance_description",
    "tool_consumer_instance_url",
    "context_type",
    "context_title",
    "context_label",
    "resource_link_description",
    "resource_link_title",
    "lis_person_name_given",
    "lis_person_name_full",
    "lis_person_contact_email_primary",
    "tool_consumer_instance_contact_email",
];
