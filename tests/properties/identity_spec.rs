//! Property tests for user/group designator parsing.

use proptest::prelude::*;

use tagdeploy::IdentitySpec;

proptest! {
    /// PROPERTY: Any u32 written in decimal is a numeric id.
    #[test]
    fn property_digits_are_ids(id in any::<u32>()) {
        prop_assert_eq!(id.to_string().parse::<IdentitySpec>().unwrap(), IdentitySpec::Id(id));
    }

    /// PROPERTY: Names containing a non-digit are looked up, never treated as ids.
    #[test]
    fn property_names_stay_names(name in "[a-z_][a-z0-9_-]{0,31}") {
        prop_assert_eq!(
            name.parse::<IdentitySpec>().unwrap(),
            IdentitySpec::Name(name.clone())
        );
    }

    /// PROPERTY: Parsing never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = s.parse::<IdentitySpec>();
    }
}
