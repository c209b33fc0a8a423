use crate::{
    Config, WeatherError,
    model::{OwCurrentResponse, OwForecastResponse},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Source of raw weather payloads.
///
/// Implementations perform exactly one outbound call per method and never retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<OwCurrentResponse, WeatherError>;

    async fn forecast(&self, city: &str) -> Result<OwForecastResponse, WeatherError>;
}

/// Construct the OpenWeatherMap provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::new(config.api_key.clone(), &config.provider)?;
    Ok(Arc::new(provider))
}
