//! Print one frame per line for a pager-style sequence of animations.
//!
//! Mirrors what a paged host does on page changes: each selection starts a
//! new run, superseding whatever is in flight.

use std::time::Duration;

use arcgauge::prelude::*;

fn main() {
    let mut gauge = Gauge::default();
    gauge.add_listener(|e: &AnimationEvent| {
        println!("# {:?} at progress={:.3}", e.phase, e.progress);
    });

    let frame = Duration::from_millis(50);
    let pages: [(f64, f64); 3] = [(0.0, 75.0), (-25.0, 100.0), (100.0, -75.0)];
    for (page, (start, end)) in pages.into_iter().enumerate() {
        gauge.animate_progress(start, end, Duration::from_millis(400));
        let mut t = 0u64;
        loop {
            let state = gauge.advance(frame);
            t += 50;
            let s = gauge.sweep();
            println!(
                "page={page} t_ms={t} label={} reached=({:.1},{:.1}) outline=({:.1},{:.1})",
                gauge.label(),
                s.reached_start,
                s.reached_sweep,
                s.outline_start,
                s.outline_sweep
            );
            if state == GaugeState::Idle {
                break;
            }
        }
    }

    gauge.set_progress(0.0);
    gauge.animate_segments(&[true, true, false, true, false], Duration::ZERO);
    println!("segments -> {}", gauge.label());
}
