//! Flat key-value state for save/restore across a host view's lifecycle.
//!
//! Keys match the persisted names used by existing hosts. Every field is
//! optional on input and reads as zero/false/empty when absent, so an old or
//! partial record still restores. Sweep angles are never stored: restore
//! replays `set_max` then `set_progress`, then re-applies the whole-degree
//! rounding of a finished run when the record was taken at rest.

use serde::{Deserialize, Serialize};

use super::controller::Gauge;
use super::types::{ArcPaint, ArcStyle, Color, FillMode};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeSnapshot {
    #[serde(rename = "progress_start_line_enabled")]
    pub start_line_enabled: bool,
    #[serde(rename = "clockwise_reached_bar_height")]
    pub clockwise_reached_width: f32,
    #[serde(rename = "clockwise_reached_bar_color")]
    pub clockwise_reached_color: u32,
    #[serde(rename = "clockwise_outline_bar_height")]
    pub clockwise_outline_width: f32,
    #[serde(rename = "clockwise_outline_bar_color")]
    pub clockwise_outline_color: u32,
    #[serde(rename = "counter_clockwise_reached_bar_height")]
    pub counter_clockwise_reached_width: f32,
    #[serde(rename = "counter_clockwise_reached_bar_color")]
    pub counter_clockwise_reached_color: u32,
    #[serde(rename = "counter_clockwise_outline_bar_height")]
    pub counter_clockwise_outline_width: f32,
    #[serde(rename = "counter_clockwise_outline_bar_color")]
    pub counter_clockwise_outline_color: u32,
    #[serde(rename = "progress_pager_fill_circle_enabled")]
    pub fill_enabled: bool,
    #[serde(rename = "progress_pager_fill_circle_color")]
    pub fill_color: u32,
    #[serde(rename = "progress_pager_fill_mode")]
    pub fill_mode: i32,
    pub max: f64,
    pub progress: f64,
    pub suffix: String,
    pub prefix: String,
    /// Taken after a completed run, with sweeps rounded to whole degrees.
    #[serde(rename = "progress_settled")]
    pub settled: bool,
}

impl GaugeSnapshot {
    fn style(&self) -> ArcStyle {
        let paint = |color: u32, width: f32| ArcPaint {
            color: Color(color),
            width,
        };
        ArcStyle {
            clockwise_reached: paint(self.clockwise_reached_color, self.clockwise_reached_width),
            clockwise_outline: paint(self.clockwise_outline_color, self.clockwise_outline_width),
            counter_clockwise_reached: paint(
                self.counter_clockwise_reached_color,
                self.counter_clockwise_reached_width,
            ),
            counter_clockwise_outline: paint(
                self.counter_clockwise_outline_color,
                self.counter_clockwise_outline_width,
            ),
            fill_enabled: self.fill_enabled,
            fill_color: Color(self.fill_color),
            fill_mode: FillMode::from_value(self.fill_mode),
            start_line_enabled: self.start_line_enabled,
        }
    }
}

impl Gauge {
    pub fn snapshot(&self) -> GaugeSnapshot {
        let s = self.style();
        GaugeSnapshot {
            start_line_enabled: s.start_line_enabled,
            clockwise_reached_width: s.clockwise_reached.width,
            clockwise_reached_color: s.clockwise_reached.color.0,
            clockwise_outline_width: s.clockwise_outline.width,
            clockwise_outline_color: s.clockwise_outline.color.0,
            counter_clockwise_reached_width: s.counter_clockwise_reached.width,
            counter_clockwise_reached_color: s.counter_clockwise_reached.color.0,
            counter_clockwise_outline_width: s.counter_clockwise_outline.width,
            counter_clockwise_outline_color: s.counter_clockwise_outline.color.0,
            fill_enabled: s.fill_enabled,
            fill_color: s.fill_color.0,
            fill_mode: s.fill_mode.value(),
            max: self.max(),
            progress: self.progress(),
            suffix: self.suffix().to_string(),
            prefix: self.prefix().to_string(),
            settled: self.is_settled(),
        }
    }

    /// Apply a snapshot. Any in-flight animation is dropped without notifications.
    ///
    /// Max and progress go through the regular setters, so invalid persisted
    /// values are ignored exactly as live ones would be.
    pub fn restore(&mut self, snap: &GaugeSnapshot) {
        self.drop_run_silently();
        self.replace_style(snap.style());
        self.set_max(snap.max);
        self.set_progress(snap.progress);
        self.resettle(snap.settled);
        self.set_prefix(Some(&snap.prefix));
        self.set_suffix(Some(&snap.suffix));
    }
}
