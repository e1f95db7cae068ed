//! Property-based tests for allow-list decisions.

use filereader_access::{AccessAuthorizer, RoleAllowListAuthorizer};
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_/.-]{1,40}").unwrap()
}

proptest! {
    #[test]
    fn admin_reads_every_non_blank_path(path in path_strategy()) {
        let auth = RoleAllowListAuthorizer::empty();
        prop_assert!(auth.can_read(&path, "admin"));
    }

    #[test]
    fn user_reads_iff_listed(listed in path_strategy(), other in path_strategy()) {
        let auth = RoleAllowListAuthorizer::new([listed.as_str()]);
        prop_assert!(auth.can_read(&listed, "user"));
        prop_assert!(auth.can_read(&listed.to_uppercase(), "user"));
        prop_assert_eq!(
            auth.can_read(&other, "user"),
            other.to_lowercase() == listed.to_lowercase()
        );
    }

    #[test]
    fn blank_role_never_reads(path in path_strategy(), spaces in " {0,4}") {
        let auth = RoleAllowListAuthorizer::new([path.as_str()]);
        prop_assert!(!auth.can_read(&path, &spaces));
    }
}
