//! Axis-tick formatting helpers shared by the chart surfaces.

/// How many decimal places tick labels need, derived from the spacing of
/// the first two ticks: enough to tell neighbouring labels apart, clamped
/// to 1..=5. One place when there are fewer than two ticks.
pub fn tick_decimal_places(ticks: &[f64]) -> usize {
    let delta = if ticks.len() > 1 {
        (ticks[1] - ticks[0]).abs()
    } else {
        0.0
    };
    if delta > 0.0 {
        (-delta.log10().floor()).clamp(1.0, 5.0) as usize
    } else {
        1
    }
}

/// Render one tick value with the precision [`tick_decimal_places`] picks
/// for the whole axis.
pub fn format_tick(value: f64, ticks: &[f64]) -> String {
    let places = tick_decimal_places(ticks);
    format!("{value:.places$}")
}

/// Label for axes that only mark whole values (years, series ordinals):
/// the number itself when whole, an empty label otherwise.
pub fn integer_tick_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        String::new()
    }
}
