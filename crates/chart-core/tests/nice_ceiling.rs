// File: crates/chart-core/tests/nice_ceiling.rs
// Purpose: Validate the digit-count + halving ceiling used for axis maxima.

use chart_core::{nice_ceiling, nice_ceiling_count, ChartError, ReplayBuffer, Rgba, ScaleBounds};

#[test]
fn known_values() {
    let cases = [
        (1.0, 1.25),
        (5.0, 5.0),
        (7.0, 10.0),
        (10.0, 12.5),
        (41.0, 50.0),
        (45.0, 50.0),
        (50.0, 50.0),
        (51.0, 100.0),
        (100.0, 125.0),
        (250.0, 250.0),
        (999.0, 1000.0),
    ];
    for (input, want) in cases {
        assert_eq!(nice_ceiling(input).unwrap(), want, "nice_ceiling({input})");
    }
}

#[test]
fn same_ceiling_class() {
    assert_eq!(nice_ceiling(41.0).unwrap(), nice_ceiling(45.0).unwrap());
}

#[test]
fn dominates_and_is_tight() {
    for v in 1..=5000u32 {
        let v = v as f64;
        let c = nice_ceiling(v).unwrap();
        assert!(c >= v, "ceiling {c} below {v}");
        assert!(c / 2.0 < v, "ceiling {c} not tight for {v}");
    }
    for v in [0.3, 2.5, 12.5, 99.9] {
        let c = nice_ceiling(v).unwrap();
        assert!(c >= v && c / 2.0 < v, "bad ceiling {c} for {v}");
    }
}

#[test]
fn zero_is_floored() {
    let c = nice_ceiling(0.0).unwrap();
    assert!(c > 0.0);
    assert_eq!(c, chart_core::bounds::ZERO_CEILING);
}

#[test]
fn rejects_degenerate_inputs() {
    assert!(matches!(nice_ceiling(-1.0), Err(ChartError::DegenerateScale { .. })));
    assert!(matches!(nice_ceiling(f64::NAN), Err(ChartError::DegenerateScale { .. })));
    assert!(matches!(nice_ceiling(f64::INFINITY), Err(ChartError::DegenerateScale { .. })));
}

#[test]
fn counts_match_float_rule() {
    for v in 0..=5000u64 {
        let want = if v == 0 { chart_core::bounds::ZERO_CEILING } else { nice_ceiling(v as f64).unwrap() };
        assert_eq!(nice_ceiling_count(v), want, "count {v}");
    }
}

#[test]
fn counts_beyond_f64_precision_stay_dominated() {
    // 5e16 + 1 rounds to 5e16 as f64, which would halve down to 5e16
    let count = 50_000_000_000_000_001u64;
    assert_eq!(nice_ceiling(count as f64).unwrap(), 5e16);
    assert_eq!(nice_ceiling_count(count), 1e17);
    assert_eq!(nice_ceiling_count(u64::MAX), 2.5e19);

    let buffer = ReplayBuffer::from_counts(&[Rgba::BLACK], &[vec![(count, 1)]]);
    let bounds = ScaleBounds::from_buffer(&buffer).unwrap();
    assert_eq!(bounds.max_ships, 1e17);
}
