//! Arc gauge core: progress-to-angle mapping and the animated controller.
//!
//! Layout
//! - `sweep`: pure mapping from (progress, max) to reached/outline arcs, plus
//!   the bounds policies applied before it.
//! - `easing`: time-fraction curves for tweens.
//! - `gauge`: the stateful controller (bounds, animation, observers, restore).
//! - `render`: draw-operation description handed to an external rasterizer.
//!
//! Everything is single-threaded. Time enters only through `Gauge::advance`,
//! so hosts drive frames and tests drive exact durations.

pub mod cfg;
pub mod easing;
pub mod gauge;
pub mod render;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use easing::Easing;
pub use gauge::{AnimationEvent, AnimationPhase, AnimationRun, Gauge, GaugeConfig, GaugeState};
pub use sweep::{compute_sweep, BoundsMode, Direction, SweepAngles};

/// Common exports for quick imports in hosts.
pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::gauge::{
        AnimationEvent, AnimationListener, AnimationPhase, AnimationRun, ArcPaint, ArcStyle,
        Color, FillMode, Gauge, GaugeConfig, GaugeSnapshot, GaugeState, ListenerId,
    };
    pub use crate::render::{scene, DrawOp, Padding, Viewport};
    pub use crate::sweep::{compute_sweep, enforce_bounds, BoundsMode, Direction, SweepAngles};
}
