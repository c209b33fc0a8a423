//! Turns OpenWeatherMap payloads into the views in [`crate::view`].
//!
//! Pure functions: no I/O, no clock, same input gives the same output.

use crate::{
    error::WeatherError,
    model::{OwCurrentResponse, OwForecastEntry, OwForecastResponse},
    units::unix_to_iso,
    view::{
        AtmosphereView, ForecastEntryView, ForecastView, Reading, SunView, Temperature,
        TemperatureView, WeatherView, WindView,
    },
};

/// 8 slots of 3 hours each.
pub const FORECAST_SLOTS: usize = 8;

/// Normalize a current-weather record.
///
/// `city` is the query the client sent; it names the `NotFound` error and
/// stands in for the location name if the provider omitted one.
pub fn normalize(record: &OwCurrentResponse, city: &str) -> Result<WeatherView, WeatherError> {
    let kelvin = record.main.temp.ok_or_else(|| WeatherError::not_found(city, None))?;

    let temperature = TemperatureView {
        current: Temperature::from_kelvin(kelvin),
        feels_like: optional_temperature(record.main.feels_like),
        min: optional_temperature(record.main.temp_min),
        max: optional_temperature(record.main.temp_max),
    };

    let atmosphere = AtmosphereView {
        humidity: record.main.humidity.clone().into(),
        pressure: record.main.pressure.clone().into(),
        visibility: record.visibility.clone().into(),
        clouds: record.clouds.all.clone().into(),
    };

    let wind = WindView {
        speed: record.wind.speed.into(),
        deg: record.wind.deg.clone().into(),
        gust: record.wind.gust.into(),
    };

    let sun = SunView {
        sunrise: record.sys.sunrise.and_then(unix_to_iso).into(),
        sunset: record.sys.sunset.and_then(unix_to_iso).into(),
    };

    Ok(WeatherView {
        city: record.name.clone().unwrap_or_else(|| city.to_string()),
        description: record.description().map(str::to_string).into(),
        temperature,
        atmosphere,
        wind,
        sun,
        observed_at: record.dt.and_then(unix_to_iso).into(),
    })
}

/// Normalize a 5-day forecast down to the next 24 hours.
///
/// Keeps the first [`FORECAST_SLOTS`] entries in the order the provider sent
/// them; nothing is sorted, deduplicated or filtered by date. An empty list,
/// or a kept slot without `main.temp`, is `NotFound` just like a current
/// record missing its temperature.
pub fn normalize_forecast(
    forecast: &OwForecastResponse,
    city: &str,
) -> Result<ForecastView, WeatherError> {
    if forecast.list.is_empty() {
        return Err(WeatherError::not_found(city, None));
    }

    let entries = forecast
        .list
        .iter()
        .take(FORECAST_SLOTS)
        .map(|entry| forecast_entry(entry, city))
        .collect::<Result<Vec<_>, _>>()?;

    let (name, country) = match &forecast.city {
        Some(c) => (c.name.clone(), c.country.clone()),
        None => (city.to_string(), None),
    };

    Ok(ForecastView { city: name, country: country.into(), entries })
}

fn forecast_entry(entry: &OwForecastEntry, city: &str) -> Result<ForecastEntryView, WeatherError> {
    let kelvin = entry.main.temp.ok_or_else(|| WeatherError::not_found(city, None))?;

    let time = match &entry.dt_txt {
        Some(txt) => txt.replacen(' ', "T", 1),
        None => unix_to_iso(entry.dt)
            .ok_or_else(|| WeatherError::upstream(format!("Invalid forecast timestamp {}", entry.dt)))?,
    };

    Ok(ForecastEntryView {
        time,
        temperature: Temperature::from_kelvin(kelvin),
        feels_like: optional_temperature(entry.main.feels_like),
        description: entry.description().map(str::to_string).into(),
        humidity: entry.main.humidity.clone().into(),
        wind_speed: entry.wind.speed.into(),
        clouds: entry.clouds.all.clone().into(),
        precipitation_probability: entry.pop.into(),
    })
}

fn optional_temperature(kelvin: Option<f64>) -> Reading<Temperature> {
    Reading::from(kelvin).map(Temperature::from_kelvin)
}
