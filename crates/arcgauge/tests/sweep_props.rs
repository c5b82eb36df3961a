//! Property checks for the progress-to-angle mapping.

use arcgauge::prelude::*;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

proptest! {
    #[test]
    fn forward_sweep_is_proportional(max in 0.5f64..1.0e4, frac in 0.0f64..=1.0) {
        let p = max * frac;
        let s = compute_sweep(p, max);
        prop_assert_eq!(s.reached_start, 270.0);
        prop_assert!((s.reached_sweep - p / max * 360.0).abs() < EPS);
        prop_assert!((s.reached_sweep + s.outline_sweep - 360.0).abs() < EPS);
        prop_assert!(s.reached_sweep >= 0.0 && s.reached_sweep <= 360.0 + EPS);
        prop_assert!(s.outline_start >= 0.0 && s.outline_start < 360.0);
        prop_assert_eq!(s.direction(), Direction::Clockwise);
    }

    #[test]
    fn backward_sweep_ends_at_twelve(max in 0.5f64..1.0e4, frac in 0.001f64..=1.0) {
        let p = -max * frac;
        let s = compute_sweep(p, max);
        prop_assert_eq!(s.outline_start, 270.0);
        prop_assert!((s.reached_start - (270.0 - s.reached_sweep)).abs() < EPS);
        prop_assert!((s.reached_sweep + s.outline_sweep - 360.0).abs() < EPS);
        prop_assert_eq!(s.direction(), Direction::CounterClockwise);
    }

    #[test]
    fn wrap_stays_within_one_turn(max in 1.0f64..500.0, v in -1.0e5f64..1.0e5) {
        let p = enforce_bounds(v, max, BoundsMode::Wrap).unwrap();
        prop_assert!(p.abs() <= max);
        let s = compute_sweep(p, max);
        prop_assert!(s.reached_sweep <= 360.0 + EPS);
    }

    #[test]
    fn strict_accepts_exactly_the_unit_range(max in 1.0f64..500.0, v in -1.0e3f64..1.0e3) {
        let accepted = enforce_bounds(v, max, BoundsMode::Strict).is_some();
        prop_assert_eq!(accepted, (0.0..=max).contains(&v));
    }

    #[test]
    fn gauge_setters_never_break_sweep_invariants(
        ops in proptest::collection::vec((any::<bool>(), -300.0f64..300.0), 1..40)
    ) {
        let mut g = Gauge::default();
        for (is_max, v) in ops {
            if is_max { g.set_max(v); } else { g.set_progress(v); }
            prop_assert!(g.max() > 0.0);
            let s = g.sweep();
            prop_assert!(s.reached_sweep >= 0.0 && s.reached_sweep <= 360.0 + EPS);
            prop_assert!((s.reached_sweep + s.outline_sweep - 360.0).abs() < EPS);
        }
    }

    #[test]
    fn snapshot_round_trip_preserves_geometry(max in 1.0f64..1000.0, frac in -1.0f64..=1.0) {
        let mut g = Gauge::default();
        g.set_max(max);
        g.set_progress(max * frac);
        let json = serde_json::to_string(&g.snapshot()).unwrap();
        let snap: GaugeSnapshot = serde_json::from_str(&json).unwrap();
        let mut h = Gauge::default();
        h.restore(&snap);
        prop_assert_eq!(h.max(), g.max());
        prop_assert_eq!(h.progress(), g.progress());
        prop_assert_eq!(h.sweep(), g.sweep());
    }
}
