//! Property tests for deployment timestamps.

use chrono::NaiveDate;
use proptest::prelude::*;

use tagdeploy::Timestamp;

fn any_timestamp() -> impl Strategy<Value = Timestamp> {
    (1970i32..=9999, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60, 0u32..1_000_000_000)
        .prop_map(|(y, mo, d, h, mi, s, ns)| {
            let dt = NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_nano_opt(h, mi, s, ns)
                .unwrap();
            Timestamp::from_naive(dt)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering is always ISO-8601 basic, 15 characters, 'T' at index 8.
    #[test]
    fn property_format_is_basic_iso_8601(ts in any_timestamp()) {
        let s = ts.to_string();
        prop_assert_eq!(s.len(), 15);
        prop_assert_eq!(&s[8..9], "T");
        prop_assert!(s.chars().enumerate().all(|(i, c)| i == 8 || c.is_ascii_digit()));
    }

    /// PROPERTY: Rendered timestamps parse back to the same value.
    #[test]
    fn property_render_parse_round_trip(ts in any_timestamp()) {
        let parsed: Timestamp = ts.to_string().parse().unwrap();
        prop_assert_eq!(parsed, ts);
    }

    /// PROPERTY: Lexicographic order of rendered timestamps matches time order.
    #[test]
    fn property_rendering_sorts_chronologically(a in any_timestamp(), b in any_timestamp()) {
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
    }
}
