//! The stable response shapes served to clients.
//!
//! These never mirror the provider schema directly; the normalizer is the
//! only place they are built.

use serde::{Serialize, Serializer};
use serde_json::Number;

use crate::units::{kelvin_to_celsius, kelvin_to_fahrenheit};

/// Sentinel emitted for fields the provider did not send.
pub const NOT_AVAILABLE: &str = "N/A";

/// A field that is either present or explicitly marked "N/A".
#[derive(Debug, Clone, PartialEq)]
pub enum Reading<T> {
    Value(T),
    NotAvailable,
}

impl<T> Reading<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reading<U> {
        match self {
            Reading::Value(v) => Reading::Value(f(v)),
            Reading::NotAvailable => Reading::NotAvailable,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Reading::Value(v) => Some(v),
            Reading::NotAvailable => None,
        }
    }
}

impl<T> From<Option<T>> for Reading<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reading::NotAvailable, Reading::Value)
    }
}

impl<T: Serialize> Serialize for Reading<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reading::Value(v) => v.serialize(serializer),
            Reading::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// One temperature in both scales, each rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    pub celsius: f64,
    pub fahrenheit: f64,
}

impl Temperature {
    pub fn from_kelvin(kelvin: f64) -> Self {
        Self { celsius: kelvin_to_celsius(kelvin), fahrenheit: kelvin_to_fahrenheit(kelvin) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureView {
    pub current: Temperature,
    pub feels_like: Reading<Temperature>,
    pub min: Reading<Temperature>,
    pub max: Reading<Temperature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtmosphereView {
    /// Percent.
    pub humidity: Reading<Number>,
    /// hPa.
    pub pressure: Reading<Number>,
    /// Metres.
    pub visibility: Reading<Number>,
    /// Cloud cover, percent.
    pub clouds: Reading<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindView {
    /// m/s.
    pub speed: Reading<f64>,
    /// Degrees, meteorological.
    pub deg: Reading<Number>,
    /// m/s.
    pub gust: Reading<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunView {
    pub sunrise: Reading<String>,
    pub sunset: Reading<String>,
}

/// Everything `/weather/{city}` returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub city: String,
    pub description: Reading<String>,
    pub temperature: TemperatureView,
    pub atmosphere: AtmosphereView,
    pub wind: WindView,
    pub sun: SunView,
    pub observed_at: Reading<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityTemperature {
    pub city: String,
    pub temperature: TemperatureView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityAtmosphere {
    pub city: String,
    pub atmosphere: AtmosphereView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityWind {
    pub city: String,
    pub wind: WindView,
}

impl WeatherView {
    pub fn into_temperature(self) -> CityTemperature {
        CityTemperature { city: self.city, temperature: self.temperature }
    }

    pub fn into_atmosphere(self) -> CityAtmosphere {
        CityAtmosphere { city: self.city, atmosphere: self.atmosphere }
    }

    pub fn into_wind(self) -> CityWind {
        CityWind { city: self.city, wind: self.wind }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntryView {
    pub time: String,
    pub temperature: Temperature,
    pub feels_like: Reading<Temperature>,
    pub description: Reading<String>,
    pub humidity: Reading<Number>,
    pub wind_speed: Reading<f64>,
    pub clouds: Reading<Number>,
    /// Probability of precipitation, 0..=1.
    pub precipitation_probability: Reading<f64>,
}

/// The next 24 hours in 3-hour slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastView {
    pub city: String,
    pub country: Reading<String>,
    pub entries: Vec<ForecastEntryView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_reading_serializes_as_sentinel() {
        let r: Reading<u8> = None.into();
        assert_eq!(serde_json::to_value(&r).unwrap(), json!("N/A"));

        let r: Reading<u8> = Some(42).into();
        assert_eq!(serde_json::to_value(&r).unwrap(), json!(42));
    }

    #[test]
    fn temperature_pair_from_kelvin() {
        let t = Temperature::from_kelvin(300.0);
        assert_eq!(serde_json::to_value(t).unwrap(), json!({ "celsius": 26.85, "fahrenheit": 80.33 }));
    }
}
