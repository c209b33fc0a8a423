//! OpenWeatherMap payloads as they come off the wire.
//!
//! Only `main` is structurally required on a current-weather record; every
//! other field may be missing and is surfaced as "not available" later on.
//! Pass-through readings are kept as raw JSON numbers so integers and
//! fractions both survive untouched.

use serde::Deserialize;
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwMain {
    /// Kelvin.
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<Number>,
    /// hPa.
    pub pressure: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwWeather {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OwWind {
    pub speed: Option<f64>,
    pub deg: Option<Number>,
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OwClouds {
    pub all: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OwSys {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Response of `/data/2.5/weather`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwCurrentResponse {
    pub name: Option<String>,
    pub main: OwMain,
    #[serde(default)]
    pub weather: Vec<OwWeather>,
    #[serde(default)]
    pub wind: OwWind,
    #[serde(default)]
    pub clouds: OwClouds,
    /// Metres.
    pub visibility: Option<Number>,
    pub dt: Option<i64>,
    #[serde(default)]
    pub sys: OwSys,
}

impl OwCurrentResponse {
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|w| w.description.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwCity {
    pub name: String,
    pub country: Option<String>,
}

/// One 3-hour slot of `/data/2.5/forecast`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwForecastEntry {
    pub dt: i64,
    pub dt_txt: Option<String>,
    pub main: OwMain,
    #[serde(default)]
    pub weather: Vec<OwWeather>,
    #[serde(default)]
    pub wind: OwWind,
    #[serde(default)]
    pub clouds: OwClouds,
    /// Probability of precipitation, 0..=1.
    pub pop: Option<f64>,
}

impl OwForecastEntry {
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|w| w.description.as_str())
    }
}

/// Response of `/data/2.5/forecast`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwForecastResponse {
    pub city: Option<OwCity>,
    pub list: Vec<OwForecastEntry>,
}
