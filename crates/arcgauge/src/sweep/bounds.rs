use super::types::BoundsMode;

/// Apply `mode` to a candidate progress value.
///
/// Returns `None` when the value must be ignored (non-finite input, or outside
/// `[0, max]` under `Strict`). `Wrap` keeps exactly `±max` so a full ring stays
/// full; every other value is reduced with the truncating remainder, which
/// keeps the sign of the input.
pub fn enforce_bounds(value: f64, max: f64, mode: BoundsMode) -> Option<f64> {
    if !value.is_finite() || !(max > 0.0) {
        return None;
    }
    match mode {
        BoundsMode::Strict => (0.0..=max).contains(&value).then_some(value),
        BoundsMode::Wrap => {
            if value.abs() == max.abs() {
                Some(value)
            } else {
                Some(value % max)
            }
        }
        BoundsMode::Clamp => Some(value.clamp(-max, max)),
    }
}
