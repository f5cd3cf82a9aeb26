//! Property tests for published directory names.

use proptest::prelude::*;

use tagdeploy::{DeploymentRequest, PublishedName, Timestamp};

fn component() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,24}")
        .unwrap()
        .prop_filter("not a dot path", |s| s != "." && s != "..")
}

proptest! {
    /// PROPERTY: The name is `<name>-<tag>-<timestamp>` and a single path component.
    #[test]
    fn property_name_layout(name in component(), tag in component()) {
        let ts: Timestamp = "20120105T104512".parse().unwrap();
        let published = PublishedName::new(&name, &tag, &ts);

        prop_assert_eq!(published.as_str(), format!("{}-{}-20120105T104512", name, tag));
        prop_assert!(!published.as_str().contains('/'));
        prop_assert!(published.as_str().ends_with(&ts.to_string()));
    }

    /// PROPERTY: A tag with a slash never produces a request.
    #[test]
    fn property_slash_in_tag_is_rejected(a in component(), b in component()) {
        let tag = format!("{}/{}", a, b);
        let result = DeploymentRequest::builder("/repo/timetables.git", tag)
            .config_file("cfg.txt")
            .data_dir("datadir")
            .owner(1000, 1000)
            .build();
        prop_assert!(result.is_err());
    }
}
