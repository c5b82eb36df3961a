//! End-to-end animation scenarios driven at a fixed frame interval.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use arcgauge::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct Counts {
    start: usize,
    end: usize,
    cancel: usize,
    repeat: usize,
}

fn counted(g: &mut Gauge) -> Rc<RefCell<Counts>> {
    let counts = Rc::new(RefCell::new(Counts::default()));
    let sink = Rc::clone(&counts);
    g.add_listener(move |e: &AnimationEvent| {
        let mut c = sink.borrow_mut();
        match e.phase {
            AnimationPhase::Start => c.start += 1,
            AnimationPhase::End => c.end += 1,
            AnimationPhase::Cancel => c.cancel += 1,
            AnimationPhase::Repeat => c.repeat += 1,
        }
    });
    counts
}

fn run_to_idle(g: &mut Gauge) -> usize {
    let mut frames = 0;
    while g.advance(FRAME) == GaugeState::Animating {
        frames += 1;
        assert!(frames < 10_000, "animation never finished");
    }
    frames
}

#[test]
fn forward_run_ends_exactly_once_per_listener() {
    let mut g = Gauge::default();
    let a = counted(&mut g);
    let b = counted(&mut g);
    g.animate_progress(0.0, 75.0, Duration::from_millis(1000));
    let frames = run_to_idle(&mut g);
    assert_eq!(frames, 62);
    assert_eq!(g.progress(), 75.0);
    assert_eq!(g.sweep().reached_sweep, 270.0);
    for c in [a, b] {
        let c = c.borrow();
        assert_eq!((c.start, c.end, c.cancel, c.repeat), (1, 1, 0, 0));
    }
}

#[test]
fn progress_moves_monotonically_toward_end() {
    let mut g = Gauge::default();
    g.animate_progress(100.0, -75.0, Duration::from_millis(500));
    let mut prev = g.progress();
    assert_eq!(prev, 100.0);
    while g.advance(FRAME) == GaugeState::Animating {
        assert!(g.progress() <= prev + 1e-9);
        prev = g.progress();
    }
    assert_eq!(g.progress(), -75.0);
    assert_eq!(g.direction(), Direction::CounterClockwise);
    assert_eq!(g.sweep().outline_start, 270.0);
    assert_eq!(g.sweep().reached_sweep, 270.0);
}

#[test]
fn retrigger_mid_flight_jumps_to_new_start() {
    let mut g = Gauge::default();
    let c = counted(&mut g);
    g.animate_progress(0.0, 75.0, Duration::from_millis(1000));
    g.advance(Duration::from_millis(300));
    let mid = g.progress();
    assert!(mid > 0.0 && mid < 75.0);
    g.animate_progress(-25.0, 100.0, Duration::from_millis(1000));
    assert_eq!(g.progress(), -25.0);
    run_to_idle(&mut g);
    assert_eq!(g.progress(), 100.0);
    let c = c.borrow();
    assert_eq!((c.start, c.end, c.cancel), (2, 1, 0));
}

#[test]
fn cancel_reports_cancel_not_end() {
    let mut g = Gauge::default();
    let c = counted(&mut g);
    g.animate_progress(0.0, 50.0, Duration::from_millis(1000));
    for _ in 0..10 {
        g.advance(FRAME);
    }
    let at = g.progress();
    assert!(g.cancel());
    assert_eq!(run_to_idle(&mut g), 0);
    assert_eq!(g.progress(), at);
    let c = c.borrow();
    assert_eq!((c.start, c.end, c.cancel), (1, 0, 1));
}

#[test]
fn strict_gauge_skips_negative_frames() {
    let mut g = Gauge::new(GaugeConfig {
        bounds: BoundsMode::Strict,
        ..GaugeConfig::default()
    });
    g.set_progress(40.0);
    g.animate_progress(-50.0, 50.0, Duration::from_millis(200));
    // Negative start is rejected; progress stays put until frames turn non-negative.
    assert_eq!(g.progress(), 40.0);
    run_to_idle(&mut g);
    assert_eq!(g.progress(), 50.0);
}

#[test]
fn segments_from_current_progress() {
    let mut g = Gauge::default();
    g.set_max(12.0);
    g.set_progress(3.0);
    assert!(g.animate_segments(&[true, false, true], Duration::from_millis(300)));
    run_to_idle(&mut g);
    assert!((g.progress() - 8.0).abs() < 1e-12);
    assert_eq!(g.sweep().reached_sweep, 240.0);
}

#[test]
fn redraw_is_signalled_after_completion() {
    let mut g = Gauge::default();
    g.take_redraw();
    g.animate_progress(0.0, 10.0, Duration::from_millis(32));
    run_to_idle(&mut g);
    assert!(g.take_redraw());
    assert!(!g.take_redraw());
}
