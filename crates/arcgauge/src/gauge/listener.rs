//! Animation lifecycle observers.
//!
//! Observers are kept in registration order and notified in that order.
//! The controller owns the boxed observer but not whatever it points at:
//! hosts typically capture an `Rc` to their own state.

use std::time::Duration;

use super::run::AnimationRun;

/// Lifecycle point being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    Start,
    End,
    Cancel,
    Repeat,
}

/// What observers receive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationEvent {
    pub phase: AnimationPhase,
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
    /// Gauge progress at the time of the notification.
    pub progress: f64,
    /// Zero-based pass index.
    pub repetition: u32,
}

impl AnimationEvent {
    pub(crate) fn new(phase: AnimationPhase, run: &AnimationRun, progress: f64) -> Self {
        Self {
            phase,
            start: run.start,
            end: run.end,
            duration: run.duration,
            progress,
            repetition: run.repetition,
        }
    }
}

/// Receives animation lifecycle notifications.
pub trait AnimationListener {
    fn on_event(&mut self, event: &AnimationEvent);
}

impl<F> AnimationListener for F
where
    F: FnMut(&AnimationEvent),
{
    fn on_event(&mut self, event: &AnimationEvent) {
        self(event)
    }
}

/// Handle returned on registration; removal is by handle identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn AnimationListener>)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Box<dyn AnimationListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(k, _)| *k == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, event: &AnimationEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener.on_event(event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
