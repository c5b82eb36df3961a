//! Easing curves for progress animation.
//!
//! An easing maps the linear time fraction `t ∈ [0, 1]` to a perceptual
//! progress fraction. All built-in curves satisfy `f(0) = 0` and `f(1) = 1`;
//! inputs outside `[0, 1]` are clamped first.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Named easing curve.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out: `2t²` on the first half, mirrored on the second.
    #[default]
    QuadEaseInOut,
    CubicEaseInOut,
    SineEaseInOut,
    /// CSS-style cubic Bézier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Host-supplied curve. Not serializable.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Evaluate the curve at `t` (clamped into `[0, 1]`).
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Easing::Linear => t,
            Easing::QuadEaseInOut => quad_ease_in_out(t),
            Easing::CubicEaseInOut => cubic_ease_in_out(t),
            Easing::SineEaseInOut => 0.5 - 0.5 * (PI * t).cos(),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_easing(t, x1, y1, x2, y2),
            Easing::Custom(f) => f(t),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Some(Easing::Linear),
            "quad" | "quad_ease_in_out" => Some(Easing::QuadEaseInOut),
            "cubic" | "cubic_ease_in_out" => Some(Easing::CubicEaseInOut),
            "sine" | "sine_ease_in_out" => Some(Easing::SineEaseInOut),
            // Material "standard" curve.
            "standard" => Some(Easing::CubicBezier {
                x1: 0.2,
                y1: 0.0,
                x2: 0.0,
                y2: 1.0,
            }),
            _ => None,
        }
    }
}

#[inline]
fn quad_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 2.0 * u * u
    }
}

#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 4.0 * u * u * u
    }
}

#[inline]
fn cubic_bezier(t: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * a + 3.0 * u * u * t * b + 3.0 * u * t * t * c + t * t * t * d
}

/// Solve `x(s) = t` by bisection, then return `y(s)`.
fn cubic_bezier_easing(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let (mut lo, mut hi) = (0.0, 1.0);
    let mut s = t;
    for _ in 0..32 {
        s = 0.5 * (lo + hi);
        if cubic_bezier(s, 0.0, x1, x2, 1.0) < t {
            lo = s;
        } else {
            hi = s;
        }
    }
    cubic_bezier(s, 0.0, y1, y2, 1.0)
}
