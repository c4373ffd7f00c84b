//! Property-based tests for resource name parsing.

#[cfg(test)]
mod proptest_tests {
    use crate::resource::{full_name, parse_name};
    use proptest::prelude::*;

    proptest! {
        /// Property: parse_name inverts full_name for full names
        #[test]
        fn full_name_round_trips(
            org in "[A-Za-z0-9_-]{1,12}",
            repo in "[A-Za-z0-9_-]{1,12}",
            item in "[A-Za-z0-9_-]{1,16}",
        ) {
            let registry = format!("{}/{}", org, repo);
            let name = full_name(&registry, &item);
            let (parsed_registry, parsed_item) = parse_name(&name).unwrap();
            prop_assert_eq!(parsed_registry, registry);
            prop_assert_eq!(parsed_item, item);
        }

        /// Property: short names parse with an empty registry
        #[test]
        fn short_name_round_trips(item in "[A-Za-z0-9_-]{1,16}") {
            let name = full_name("", &item);
            prop_assert_eq!(&name, &item);
            let (registry, parsed_item) = parse_name(&name).unwrap();
            prop_assert_eq!(registry, "");
            prop_assert_eq!(parsed_item, item);
        }

        /// Property: parse_name never panics, whatever the input
        #[test]
        fn parse_name_is_total(input in ".*") {
            let _ = parse_name(&input);
        }

        /// Property: a name with exactly one slash is always rejected
        #[test]
        fn single_slash_is_invalid(
            left in "[A-Za-z0-9_-]{1,12}",
            right in "[A-Za-z0-9_-]{1,12}",
        ) {
            let name = format!("{}/{}", left, right);
            prop_assert!(parse_name(&name).unwrap_err().is_invalid_name());
        }
    }
}
