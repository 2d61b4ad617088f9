//! Conversions between percentages and device units.

/// Map `percentage` (0–100) linearly onto `[range_start, range_end]`.
///
/// Computed in floating point and rounded half away from zero, so
/// `percentage_to_value(10, 20, 250)` is `43`. Percentages above 100 map past
/// `range_end`; the setters reject such values rather than clamping them.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentage_to_value(percentage: u8, range_start: u16, range_end: u16) -> u16 {
    let start = f64::from(range_start);
    let span = f64::from(range_end) - start;
    (start + f64::from(percentage) / 100.0 * span).round() as u16
}

/// Map `value` back onto 0–100 relative to `[range_start, range_end]`.
///
/// Values outside the range saturate to 0 or 100; the fraction is truncated.
/// An empty or inverted range yields 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn value_to_percentage(value: u16, range_start: u16, range_end: u16) -> u8 {
    if range_end <= range_start {
        return 0;
    }
    let clamped = value.clamp(range_start, range_end);
    let fraction = f64::from(clamped - range_start) / f64::from(range_end - range_start);
    (fraction * 100.0) as u8
}
