//! Temperature and time conversions.
//!
//! Both temperature scales are computed straight from Kelvin, so the
//! Fahrenheit value never inherits rounding from the Celsius one.

use chrono::DateTime;

const KELVIN_OFFSET: f64 = 273.15;

/// Round to two decimal places; exact ties go to the even digit.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    round2(kelvin - KELVIN_OFFSET)
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    round2((kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0)
}

/// Unix seconds to a naive ISO-8601 timestamp (`YYYY-MM-DDTHH:MM:SS`, UTC wall clock).
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn unix_to_iso(ts: i64) -> Option<String> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_room_temperature() {
        assert_eq!(kelvin_to_celsius(300.0), 26.85);
        assert_eq!(kelvin_to_fahrenheit(300.0), 80.33);
    }

    #[test]
    fn freezing_and_absolute_zero() {
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
        assert_eq!(kelvin_to_fahrenheit(273.15), 32.0);
        assert_eq!(kelvin_to_celsius(0.0), -273.15);
        assert_eq!(kelvin_to_fahrenheit(0.0), -459.67);
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);

        // 273.275 - 273.15 is exactly 0.125
        assert_eq!(kelvin_to_celsius(273.275), 0.12);
        // 273.775 - 273.15 is exactly 0.625, and 0.625 * 9 / 5 + 32 is exactly 33.125
        assert_eq!(kelvin_to_celsius(273.775), 0.62);
        assert_eq!(kelvin_to_fahrenheit(273.775), 33.12);
    }

    #[test]
    fn known_conversions() {
        let cases = [
            (250.0, -23.15, -9.67),
            (288.15, 15.0, 59.0),
            (310.15, 37.0, 98.6),
            (373.15, 100.0, 212.0),
        ];

        for (kelvin, celsius, fahrenheit) in cases {
            assert_eq!(kelvin_to_celsius(kelvin), celsius, "celsius for {kelvin}");
            assert_eq!(kelvin_to_fahrenheit(kelvin), fahrenheit, "fahrenheit for {kelvin}");
        }
    }

    #[test]
    fn formats_unix_timestamps() {
        assert_eq!(unix_to_iso(0).as_deref(), Some("1970-01-01T00:00:00"));
        assert_eq!(unix_to_iso(1_700_000_000).as_deref(), Some("2023-11-14T22:13:20"));
        assert_eq!(unix_to_iso(i64::MAX), None);
    }
}
