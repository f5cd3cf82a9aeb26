//! Property tests for manifest parsing.

use proptest::prelude::*;

use tagdeploy::{Manifest, Timestamp};

proptest! {
    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = Manifest::parse(&s);
    }

    /// PROPERTY: Any rendered manifest parses back to itself.
    #[test]
    fn property_render_parse_round_trip(
        repository in "[A-Za-z0-9/:._-]{1,64}",
        tag in "[A-Za-z0-9._-]{1,32}",
    ) {
        let manifest = Manifest {
            repository,
            tag,
            time: "20120105T104512".parse::<Timestamp>().unwrap(),
        };
        prop_assert_eq!(Manifest::parse(&manifest.render()).unwrap(), manifest);
    }
}
