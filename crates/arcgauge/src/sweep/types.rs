//! Sweep result and direction/bounds selectors.

use serde::{Deserialize, Serialize};

use crate::cfg::{FULL_TURN, START_12};

/// Which way the reached arc grows from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[inline]
    pub fn of(progress: f64) -> Self {
        if progress >= 0.0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Clockwise => "clockwise",
            Direction::CounterClockwise => "counter_clockwise",
        }
    }
}

/// Start and sweep angles (degrees) of the two arcs drawn by the gauge.
///
/// Always derived from progress/max; never persisted on its own.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepAngles {
    pub reached_start: f64,
    pub reached_sweep: f64,
    pub outline_start: f64,
    pub outline_sweep: f64,
    /// Regime chosen from the sign of progress, not from the angles.
    pub direction: Direction,
}

impl Default for SweepAngles {
    /// Empty ring: nothing reached, the outline covers the full turn.
    fn default() -> Self {
        Self {
            reached_start: START_12,
            reached_sweep: 0.0,
            outline_start: START_12,
            outline_sweep: FULL_TURN,
            direction: Direction::Clockwise,
        }
    }
}

impl SweepAngles {
    /// Regime the arcs were computed in. A tiny negative progress can leave
    /// `reached_start` at exactly 12 o'clock and is still counter-clockwise.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Round both sweeps to whole degrees. Starts are left untouched.
    #[inline]
    pub fn rounded(self) -> Self {
        Self {
            reached_sweep: self.reached_sweep.round(),
            outline_sweep: self.outline_sweep.round(),
            ..self
        }
    }

    /// Same direction and `|a - b| <= eps` on all four angles.
    pub fn approx_eq(&self, other: &SweepAngles, eps: f64) -> bool {
        self.direction == other.direction
            && (self.reached_start - other.reached_start).abs() <= eps
            && (self.reached_sweep - other.reached_sweep).abs() <= eps
            && (self.outline_start - other.outline_start).abs() <= eps
            && (self.outline_sweep - other.outline_sweep).abs() <= eps
    }
}

/// How out-of-range progress values are handled before mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsMode {
    /// Single-direction: only `[0, max]` is accepted; anything else is ignored.
    Strict,
    /// Bidirectional: `value % max`, except that `±max` is kept as is.
    #[default]
    Wrap,
    /// Bidirectional: clamp into `[-max, max]`.
    Clamp,
}

impl BoundsMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(BoundsMode::Strict),
            "wrap" => Some(BoundsMode::Wrap),
            "clamp" => Some(BoundsMode::Clamp),
            _ => None,
        }
    }
}
