//! Property-based tests using proptest

use hms_core::{
    decompose::Decomposed, format_hms, hms, parse::parse_hms_strict, parse_hms, Hms,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_round_trip_whole_seconds(seconds in any::<i64>()) {
        let v = Hms::from_seconds(seconds as f64);
        let parsed = parse_hms_strict(&format_hms(v)).unwrap();

        prop_assert_eq!(parsed, v);
    }

    #[test]
    fn prop_round_trip_fractional(seconds in -1.0e9f64..1.0e9f64) {
        let v = Hms::from_seconds(seconds);
        let parsed = parse_hms(&format_hms(v));

        prop_assert_eq!(parsed.seconds().to_bits(), v.seconds().to_bits());
    }

    #[test]
    fn prop_round_trip_any_finite(bits in any::<u64>()) {
        let seconds = f64::from_bits(bits);
        prop_assume!(seconds.is_finite());

        let parsed = parse_hms(&format_hms(Hms::from_seconds(seconds)));
        prop_assert_eq!(parsed.seconds().to_bits(), seconds.to_bits());
    }

    #[test]
    fn prop_decomposed_components_in_range(seconds in any::<f64>()) {
        if let Some(d) = Decomposed::from_hms(Hms::from_seconds(seconds)) {
            prop_assert!(d.minute_of_hour < 60);
            prop_assert!(d.second_of_minute < 60);
            prop_assert!(d.split_seconds >= 0.0 && d.split_seconds < 1.0);
            prop_assert_eq!(d.negative, seconds.is_sign_negative());
        }
    }

    #[test]
    fn prop_construction_linearity(
        rows in prop::collection::vec((0i32..60, 0i32..60, 0i32..24, 0i32..400), 0..32)
    ) {
        let s: Vec<f64> = rows.iter().map(|r| f64::from(r.0)).collect();
        let m: Vec<f64> = rows.iter().map(|r| f64::from(r.1)).collect();
        let h: Vec<f64> = rows.iter().map(|r| f64::from(r.2)).collect();
        let d: Vec<f64> = rows.iter().map(|r| f64::from(r.3)).collect();

        let combined = hms(
            Some(s.as_slice()),
            Some(m.as_slice()),
            Some(h.as_slice()),
            Some(d.as_slice()),
        )
        .unwrap();
        prop_assert_eq!(combined.len(), rows.len());

        for (i, v) in combined.iter().enumerate() {
            let flat = s[i] + 60.0 * m[i] + 3_600.0 * h[i] + 86_400.0 * d[i];
            prop_assert_eq!(v.seconds(), flat);
        }
    }

    #[test]
    fn prop_parse_never_panics(text in "\\PC{0,32}") {
        let _ = parse_hms(&text);
    }

    #[test]
    fn prop_format_never_panics(bits in any::<u64>()) {
        let _ = format_hms(Hms::from_seconds(f64::from_bits(bits)));
    }
}
