//! Temperature unit conversion.

/// Converts Kelvin to Fahrenheit.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * (9.0 / 5.0) - 459.67
}

/// Rounds half-up, so `-0.5` becomes `0` and `80.5` becomes `81`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Whole-degree Fahrenheit reading for a raw Kelvin temperature.
pub fn display_fahrenheit(kelvin: f64) -> i64 {
    round_half_up(kelvin_to_fahrenheit(kelvin))
}
