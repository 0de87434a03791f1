use proptest::prelude::*;
use std::path::Path;
use treebench::errors::BenchError;
use treebench::import::{parse_sample_count, parse_series_set};

fn join(values: &[i64]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        cases: 64,
        .. proptest::test_runner::Config::default()
    })]

    #[test]
    fn prop_valid_series_round_trip(
        (n, a, b, c) in (0usize..40).prop_flat_map(|n| (
            Just(n),
            proptest::collection::vec(any::<i64>(), n),
            proptest::collection::vec(any::<i64>(), n),
            proptest::collection::vec(any::<i64>(), n),
        ))
    ) {
        let body = format!("{}\n{}\n{}\n", join(&a), join(&b), join(&c));
        let s = parse_series_set(body.as_bytes(), n, Path::new("prop")).unwrap();
        prop_assert_eq!(s.len(), n);
        prop_assert_eq!(join(s.insert()), join(&a));
        prop_assert_eq!(s.delete(), &b[..]);
        prop_assert_eq!(s.find(), &c[..]);
    }

    #[test]
    fn prop_wrong_length_always_rejected(n in 0usize..20, extra in 1usize..5, shrink in any::<bool>()) {
        let actual = if shrink { n.saturating_sub(extra) } else { n + extra };
        prop_assume!(actual != n);
        let line = join(&vec![1i64; actual]);
        let good = join(&vec![2i64; n]);
        let body = format!("{good}\n{line}\n{good}\n");
        let res = parse_series_set(body.as_bytes(), n, Path::new("prop"));
        let is_mismatch = matches!(res, Err(BenchError::LengthMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    #[test]
    fn prop_sample_count_accepts_any_usize_text(n in any::<u32>()) {
        prop_assert_eq!(parse_sample_count(&format!(" {n}\n")).unwrap(), n as usize);
    }
}
