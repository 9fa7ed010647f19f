//! Moderator role evaluation

use lti_types::params::MODERATOR_ROLES;
use lti_types::RoleSet;

/// Whether the raw `roles` value grants moderator status.
///
/// True iff the value is non-empty and contains any moderator role as a
/// case-insensitive substring, so both `Instructor` and
/// `urn:lti:role:ims/lis/Instructor` match.
pub fn is_moderator(roles: Option<&str>) -> bool {
    RoleSet::from(roles).contains_any(&MODERATOR_ROLES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_instructor_in_list() {
        assert!(is_moderator(Some("Instructor,Learner")));
    }

    #[test]
    fn test_learner_only() {
        assert!(!is_moderator(Some("Learner")));
    }

    #[test]
    fn test_absent_or_empty() {
        assert!(!is_moderator(None));
        assert!(!is_moderator(Some("")));
    }

    #[test]
    fn test_urn_and_multiword_roles() {
        assert!(is_moderator(Some("urn:lti:role:ims/lis/TeachingAssistant")));
        assert!(is_moderator(Some("Learner,Content Developer")));
        assert!(is_moderator(Some("ADMINISTRATOR")));
        assert!(!is_moderator(Some("ContentDeveloper")));
    }

    proptest! {
        #[test]
        fn any_case_of_a_moderator_role_matches(
            index in 0..MODERATOR_ROLES.len(),
            upper in proptest::collection::vec(any::<bool>(), 32),
            prefix in "[a-z,]{0,8}",
        ) {
            let role: String = MODERATOR_ROLES[index]
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            let roles = format!("{}{}", prefix, role);
            prop_assert!(is_moderator(Some(&roles)));
        }
    }
}
