//! The single in-flight animation.

use std::time::Duration;

use crate::easing::Easing;

/// Parameters and clock of one progress tween.
///
/// Exists only while animating; the controller holds at most one.
#[derive(Clone, Copy, Debug)]
pub struct AnimationRun {
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
    pub easing: Easing,
    /// Extra passes after the first one; each restarts from `start`.
    pub repeat_count: u32,
    pub(crate) elapsed: Duration,
    pub(crate) repetition: u32,
}

impl AnimationRun {
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            easing: Easing::default(),
            repeat_count: 0,
            elapsed: Duration::ZERO,
            repetition: 0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_repeat(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Time spent in the current pass.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Zero-based index of the current pass.
    #[inline]
    pub fn repetition(&self) -> u32 {
        self.repetition
    }

    /// `clamp(elapsed / duration, 0, 1)`; a zero duration counts as finished.
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Interpolated progress at the current clock.
    pub fn sample(&self) -> f64 {
        self.value_at(self.fraction())
    }

    /// `start + (end - start) * easing(t)`.
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        self.start + (self.end - self.start) * self.easing.apply(t)
    }

    #[inline]
    pub(crate) fn pass_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    pub(crate) fn has_repeat_left(&self) -> bool {
        self.repetition < self.repeat_count
    }
}
