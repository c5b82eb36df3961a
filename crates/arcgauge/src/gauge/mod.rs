//! GaugeController: owns progress, maximum, style and the single animation slot.
//!
//! Purpose
//! - Route every progress/max change through the bounds policy and the sweep
//!   mapping, and raise a redraw signal for the host.
//! - Drive one host-clocked tween at a time (`Idle` ⇄ `Animating`), notifying
//!   observers of start/end/cancel/repeat.
//! - Save and restore the persisted scalar state.
//!
//! State machine
//! - `animate*` enters `Animating`; a second call replaces the run and snaps
//!   progress to the new start (no notification for the replaced run).
//! - `advance` past the duration lands on `end`, rounds the sweeps to whole
//!   degrees, notifies `End`, and returns to `Idle`.
//! - `cancel` returns to `Idle` at the last sampled value and notifies `Cancel`.
//!
//! Code cross-refs: `sweep::{compute_sweep, enforce_bounds}`, `easing::Easing`.

mod controller;
mod listener;
mod run;
mod snapshot;
mod types;

pub use controller::Gauge;
pub use listener::{AnimationEvent, AnimationListener, AnimationPhase, ListenerId};
pub use run::AnimationRun;
pub use snapshot::GaugeSnapshot;
pub use types::{dp_to_px, ArcPaint, ArcStyle, Color, FillMode, GaugeConfig, GaugeState};
