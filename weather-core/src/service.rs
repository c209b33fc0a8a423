//! Fetch + normalize, one provider call per lookup.

use std::sync::Arc;

use tracing::instrument;

use crate::{
    WeatherError,
    normalize::{normalize, normalize_forecast},
    provider::WeatherProvider,
    view::{CityAtmosphere, CityTemperature, CityWind, ForecastView, WeatherView},
};

#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    #[instrument(skip(self))]
    pub async fn current(&self, city: &str) -> Result<WeatherView, WeatherError> {
        let record = self.provider.current(city).await?;
        normalize(&record, city)
    }

    pub async fn temperature(&self, city: &str) -> Result<CityTemperature, WeatherError> {
        self.current(city).await.map(WeatherView::into_temperature)
    }

    pub async fn atmosphere(&self, city: &str) -> Result<CityAtmosphere, WeatherError> {
        self.current(city).await.map(WeatherView::into_atmosphere)
    }

    pub async fn wind(&self, city: &str) -> Result<CityWind, WeatherError> {
        self.current(city).await.map(WeatherView::into_wind)
    }

    #[instrument(skip(self))]
    pub async fn forecast(&self, city: &str) -> Result<ForecastView, WeatherError> {
        let forecast = self.provider.forecast(city).await?;
        normalize_forecast(&forecast, city)
    }
}
