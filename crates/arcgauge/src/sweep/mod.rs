//! Progress-to-geometry mapping.
//!
//! Purpose
//! - Turn a progress value and a maximum into the start/sweep angles of the
//!   reached arc and the outline (unreached) arc.
//! - Keep the bounds policy next to the mapping, since over-range handling
//!   decides which regime (clockwise or counter-clockwise) a value lands in.
//!
//! Regimes
//! - `progress >= 0`: the reached arc starts at 12 o'clock and sweeps
//!   clockwise; the outline arc covers the rest of the ring.
//! - `progress < 0`: the reached arc ends at 12 o'clock (it "grows"
//!   counter-clockwise); the outline arc starts at 12 o'clock.
//!
//! Code cross-refs: `gauge::Gauge::set_progress`, `render::scene`.

mod bounds;
mod types;

pub use bounds::enforce_bounds;
pub use types::{BoundsMode, Direction, SweepAngles};

use crate::cfg::{FULL_TURN, START_12};

/// Map `progress` against `max` onto arc angles (degrees, canvas convention).
///
/// Pre: `max > 0` and both values finite. The caller applies bounds first;
/// this function does not wrap or clamp.
pub fn compute_sweep(progress: f64, max: f64) -> SweepAngles {
    debug_assert!(max > 0.0, "compute_sweep requires a positive max");
    if progress >= 0.0 {
        let reached_sweep = progress / max * FULL_TURN;
        SweepAngles {
            reached_start: START_12,
            reached_sweep,
            outline_start: (START_12 + reached_sweep) % FULL_TURN,
            outline_sweep: FULL_TURN - reached_sweep,
            direction: Direction::Clockwise,
        }
    } else {
        let reached_sweep = (progress / max * FULL_TURN).abs();
        SweepAngles {
            reached_start: START_12 - reached_sweep,
            reached_sweep,
            outline_start: START_12,
            outline_sweep: FULL_TURN - reached_sweep,
            direction: Direction::CounterClockwise,
        }
    }
}
