//! Angle and default constants (internal).
//!
//! Angles use the canvas convention: 0° is 3 o'clock and angles grow
//! clockwise, so 12 o'clock sits at 270°.
//!
//! ```text
//!      12
//!  9        3
//!      6
//! ```

/// 12 o'clock.
pub const START_12: f64 = 270.0;
/// 3 o'clock.
pub const START_3: f64 = 0.0;
/// 6 o'clock.
pub const START_6: f64 = 90.0;
/// 9 o'clock.
pub const START_9: f64 = 180.0;

/// One revolution in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Denominator of the progress-to-angle ratio unless configured otherwise.
pub const DEFAULT_MAX: f64 = 100.0;

/// Reached arc stroke width in dp before density scaling.
pub(crate) const DEFAULT_REACHED_WIDTH_DP: f32 = 5.0;
/// Outline arc stroke width in dp before density scaling.
pub(crate) const DEFAULT_OUTLINE_WIDTH_DP: f32 = 1.0;

/// ARGB `#00c853`.
pub(crate) const DEFAULT_CLOCKWISE_COLOR: u32 = 0xff00_c853;
/// ARGB `#ffffff`.
pub(crate) const DEFAULT_COUNTER_CLOCKWISE_COLOR: u32 = 0xffff_ffff;
/// Fully transparent; a fill with this color counts as "no fill".
pub(crate) const DEFAULT_FILL_COLOR: u32 = 0x0000_0000;
