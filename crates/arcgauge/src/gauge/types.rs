//! Style, configuration, and state types owned by the gauge.

use serde::{Deserialize, Serialize};

use crate::cfg::{
    DEFAULT_CLOCKWISE_COLOR, DEFAULT_COUNTER_CLOCKWISE_COLOR, DEFAULT_FILL_COLOR, DEFAULT_MAX,
    DEFAULT_OUTLINE_WIDTH_DP, DEFAULT_REACHED_WIDTH_DP,
};
use crate::easing::Easing;
use crate::sweep::{BoundsMode, Direction};

/// Convert device-independent units to pixels (rounded half up by the `+ 0.5`).
#[inline]
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    dp * density + 0.5
}

/// Packed ARGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(DEFAULT_FILL_COLOR);

    /// Parse `#rrggbb` (opaque) or `#aarrggbb`.
    pub fn from_hex(s: &str) -> Option<Color> {
        let hex = s.trim().strip_prefix('#')?;
        let v = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Color(0xff00_0000 | v)),
            8 => Some(Color(v)),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:08x}", self.0)
    }

    #[inline]
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// How the ring interior is filled when fill is enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Full disc behind the arcs.
    #[default]
    Default,
    /// Pie slice matching the reached sweep.
    Pie,
}

impl FillMode {
    /// Persisted integer form: 0 = default, 1 = pie. Unknown values fall back to default.
    pub fn from_value(v: i32) -> Self {
        match v {
            1 => FillMode::Pie,
            _ => FillMode::Default,
        }
    }

    pub fn value(self) -> i32 {
        match self {
            FillMode::Default => 0,
            FillMode::Pie => 1,
        }
    }
}

/// Stroke color and width (px) for one arc.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcPaint {
    pub color: Color,
    pub width: f32,
}

/// Visual configuration handed to the render boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcStyle {
    pub clockwise_reached: ArcPaint,
    pub clockwise_outline: ArcPaint,
    pub counter_clockwise_reached: ArcPaint,
    pub counter_clockwise_outline: ArcPaint,
    pub fill_enabled: bool,
    pub fill_color: Color,
    pub fill_mode: FillMode,
    pub start_line_enabled: bool,
}

impl Default for ArcStyle {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl ArcStyle {
    /// Defaults with stroke widths scaled by the host's display density.
    pub fn with_density(density: f32) -> Self {
        let reached = dp_to_px(DEFAULT_REACHED_WIDTH_DP, density);
        let outline = dp_to_px(DEFAULT_OUTLINE_WIDTH_DP, density);
        let cw = Color(DEFAULT_CLOCKWISE_COLOR);
        let ccw = Color(DEFAULT_COUNTER_CLOCKWISE_COLOR);
        Self {
            clockwise_reached: ArcPaint { color: cw, width: reached },
            clockwise_outline: ArcPaint { color: cw, width: outline },
            counter_clockwise_reached: ArcPaint { color: ccw, width: reached },
            counter_clockwise_outline: ArcPaint { color: ccw, width: outline },
            fill_enabled: false,
            fill_color: Color::TRANSPARENT,
            fill_mode: FillMode::Default,
            start_line_enabled: true,
        }
    }

    #[inline]
    pub fn reached_paint(&self, dir: Direction) -> ArcPaint {
        match dir {
            Direction::Clockwise => self.clockwise_reached,
            Direction::CounterClockwise => self.counter_clockwise_reached,
        }
    }

    #[inline]
    pub fn outline_paint(&self, dir: Direction) -> ArcPaint {
        match dir {
            Direction::Clockwise => self.clockwise_outline,
            Direction::CounterClockwise => self.counter_clockwise_outline,
        }
    }

    /// Set the fill color; fill is enabled iff the color is not fully transparent black.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.fill_enabled = color != Color::TRANSPARENT;
    }
}

/// Constructor input for [`super::Gauge`]. Every field has a documented default.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Denominator of the progress ratio (100). Non-positive values fall back to the default.
    pub max: f64,
    /// Initial progress (0).
    pub progress: f64,
    /// Over-range policy (`Wrap`).
    pub bounds: BoundsMode,
    /// Easing for `animate_progress` (quadratic ease-in-out).
    pub easing: Easing,
    /// Display density used for default stroke widths (1.0).
    pub density: f32,
    /// Explicit style; `None` derives defaults from `density`.
    pub style: Option<ArcStyle>,
    /// Text shown before the number ("").
    pub prefix: String,
    /// Text shown after the number ("%").
    pub suffix: String,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            progress: 0.0,
            bounds: BoundsMode::default(),
            easing: Easing::default(),
            density: 1.0,
            style: None,
            prefix: String::new(),
            suffix: "%".to_string(),
        }
    }
}

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeState {
    Idle,
    Animating,
}
