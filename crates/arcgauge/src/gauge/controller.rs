//! `Gauge`: progress/max ownership, bounds, animation driver, observers.

use std::time::Duration;

use tracing::{debug, trace};

use super::listener::{AnimationEvent, AnimationListener, AnimationPhase, ListenerId, Listeners};
use super::run::AnimationRun;
use super::types::{ArcStyle, Color, GaugeConfig, GaugeState};
use crate::cfg::DEFAULT_MAX;
use crate::easing::Easing;
use crate::sweep::{compute_sweep, enforce_bounds, BoundsMode, Direction, SweepAngles};

/// Arc gauge controller.
///
/// Single-threaded and host-clocked: the host calls [`Gauge::advance`] from its
/// frame callback and repaints whenever [`Gauge::take_redraw`] returns `true`.
/// Invalid inputs are ignored (state unchanged); mutators return `false` in
/// that case so callers can tell.
#[derive(Debug)]
pub struct Gauge {
    max: f64,
    progress: f64,
    bounds: BoundsMode,
    easing: Easing,
    sweep: SweepAngles,
    style: ArcStyle,
    prefix: String,
    suffix: String,
    run: Option<AnimationRun>,
    listeners: Listeners,
    dirty: bool,
    // Sweeps were rounded by a finished run and have not moved since.
    settled: bool,
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new(GaugeConfig::default())
    }
}

impl Gauge {
    pub fn new(cfg: GaugeConfig) -> Self {
        let mut g = Self {
            max: DEFAULT_MAX,
            progress: 0.0,
            bounds: cfg.bounds,
            easing: cfg.easing,
            sweep: SweepAngles::default(),
            style: cfg
                .style
                .unwrap_or_else(|| ArcStyle::with_density(cfg.density)),
            prefix: String::new(),
            suffix: String::new(),
            run: None,
            listeners: Listeners::default(),
            dirty: true,
            settled: false,
        };
        g.set_max(cfg.max);
        g.set_progress(cfg.progress);
        g.set_prefix(Some(&cfg.prefix));
        g.set_suffix(Some(&cfg.suffix));
        g
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn sweep(&self) -> SweepAngles {
        self.sweep
    }

    /// Regime of the current arcs; selects the clockwise or counter-clockwise paints.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.sweep.direction()
    }

    #[inline]
    pub fn bounds(&self) -> BoundsMode {
        self.bounds
    }

    /// Takes effect on the next progress assignment; the stored value is not revisited.
    pub fn set_bounds(&mut self, bounds: BoundsMode) {
        self.bounds = bounds;
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Assign progress through the bounds policy and recompute the arcs.
    ///
    /// Returns `false` (and changes nothing) when the policy rejects the value.
    /// Re-assigning the current value is accepted but raises no redraw.
    pub fn set_progress(&mut self, value: f64) -> bool {
        let Some(p) = enforce_bounds(value, self.max, self.bounds) else {
            debug!(value, max = self.max, bounds = ?self.bounds, "progress rejected");
            return false;
        };
        if p == self.progress {
            return true;
        }
        self.progress = p;
        self.refresh_sweep();
        true
    }

    /// Change the denominator. Non-positive or non-finite values are ignored.
    ///
    /// The stored progress number is kept and reinterpreted against the new
    /// maximum; for rendering it is held to one revolution.
    pub fn set_max(&mut self, value: f64) -> bool {
        if !(value > 0.0 && value.is_finite()) {
            debug!(value, "max rejected");
            return false;
        }
        self.max = value;
        self.refresh_sweep();
        true
    }

    fn derived_sweep(&self) -> SweepAngles {
        compute_sweep(self.progress.clamp(-self.max, self.max), self.max)
    }

    fn refresh_sweep(&mut self) {
        self.sweep = self.derived_sweep();
        self.settled = false;
        self.dirty = true;
    }

    /// Whether the arcs hold the whole-degree sweeps of a completed run.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// `None` stores an empty prefix.
    pub fn set_prefix(&mut self, prefix: Option<&str>) {
        self.prefix = prefix.unwrap_or_default().to_string();
    }

    /// `None` stores an empty suffix.
    pub fn set_suffix(&mut self, suffix: Option<&str>) {
        self.suffix = suffix.unwrap_or_default().to_string();
    }

    /// Host text such as `75%`: prefix, progress rounded to an integer, suffix.
    pub fn label(&self) -> String {
        format!("{}{}{}", self.prefix, self.progress.round() as i64, self.suffix)
    }

    pub fn style(&self) -> &ArcStyle {
        &self.style
    }

    /// Edit the style in place; always raises a redraw.
    pub fn update_style(&mut self, f: impl FnOnce(&mut ArcStyle)) {
        f(&mut self.style);
        self.dirty = true;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.update_style(|s| s.set_fill_color(color));
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Consume the redraw signal.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn add_listener(&mut self, listener: impl AnimationListener + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Returns whether the listener was registered and has been removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[inline]
    pub fn state(&self) -> GaugeState {
        if self.run.is_some() {
            GaugeState::Animating
        } else {
            GaugeState::Idle
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    pub fn current_run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Tween from `start` to `end` with the configured easing.
    pub fn animate_progress(&mut self, start: f64, end: f64, duration: Duration) {
        self.animate(AnimationRun::new(start, end, duration).with_easing(self.easing));
    }

    /// Tween from the current progress to `trues / len * max`.
    ///
    /// Each segment contributes an equal share of the full sweep; only the
    /// aggregate is animated. An empty slice is ignored.
    pub fn animate_segments(&mut self, segments: &[bool], duration: Duration) -> bool {
        if segments.is_empty() {
            debug!("segment animation ignored: no segments");
            return false;
        }
        let reached = segments.iter().filter(|s| **s).count();
        let target = reached as f64 / segments.len() as f64 * self.max;
        self.animate(AnimationRun::new(self.progress, target, duration).with_easing(self.easing));
        true
    }

    /// Start `run`, superseding any run in flight.
    ///
    /// The superseded run gets no further notifications. Progress jumps to
    /// `run.start` before the first frame. A zero duration completes at once.
    pub fn animate(&mut self, mut run: AnimationRun) {
        if let Some(prev) = self.run.take() {
            debug!(
                prev_start = prev.start,
                prev_end = prev.end,
                at = self.progress,
                "animation superseded"
            );
        }
        run.elapsed = Duration::ZERO;
        run.repetition = 0;
        self.set_progress(run.start);
        debug!(
            start = run.start,
            end = run.end,
            duration_ms = run.duration.as_millis() as u64,
            "animation start"
        );
        self.emit(AnimationPhase::Start, &run);
        if run.duration.is_zero() {
            self.finish(run);
        } else {
            self.run = Some(run);
        }
    }

    /// Advance the in-flight run by `dt` and sample it once.
    pub fn advance(&mut self, dt: Duration) -> GaugeState {
        let Some(mut run) = self.run.take() else {
            return GaugeState::Idle;
        };
        run.elapsed = run.elapsed.saturating_add(dt);
        while run.pass_complete() && run.has_repeat_left() {
            run.elapsed -= run.duration;
            run.repetition += 1;
            self.set_progress(run.start);
            self.emit(AnimationPhase::Repeat, &run);
        }
        if run.pass_complete() {
            self.finish(run);
            return GaugeState::Idle;
        }
        let value = run.sample();
        self.set_progress(value);
        trace!(t = run.fraction(), value, progress = self.progress, "frame");
        self.run = Some(run);
        GaugeState::Animating
    }

    /// Stop the in-flight run where it is. Returns `false` when idle.
    pub fn cancel(&mut self) -> bool {
        match self.run.take() {
            Some(run) => {
                debug!(at = self.progress, "animation cancelled");
                self.emit(AnimationPhase::Cancel, &run);
                true
            }
            None => false,
        }
    }

    /// Land exactly on `end`, round the sweeps once, then notify.
    fn finish(&mut self, run: AnimationRun) {
        self.set_progress(run.end);
        self.sweep = self.sweep.rounded();
        self.settled = true;
        debug!(progress = self.progress, "animation end");
        self.emit(AnimationPhase::End, &run);
        self.dirty = true;
    }

    fn emit(&mut self, phase: AnimationPhase, run: &AnimationRun) {
        let event = AnimationEvent::new(phase, run, self.progress);
        self.listeners.notify(&event);
    }

    // Restore support (see `snapshot.rs`).
    pub(crate) fn drop_run_silently(&mut self) {
        if self.run.take().is_some() {
            debug!("in-flight animation dropped by restore");
        }
    }

    pub(crate) fn replace_style(&mut self, style: ArcStyle) {
        self.style = style;
        self.dirty = true;
    }

    /// Re-derive the arcs from progress/max, rounding them when `settled`.
    pub(crate) fn resettle(&mut self, settled: bool) {
        let sweep = self.derived_sweep();
        self.sweep = if settled { sweep.rounded() } else { sweep };
        self.settled = settled;
        self.dirty = true;
    }
}
