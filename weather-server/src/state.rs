use std::sync::Arc;

use weather_core::WeatherService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub weather: Arc<WeatherService>,
}

impl AppState {
    pub fn new(weather: WeatherService) -> Self {
        Self { weather: Arc::new(weather) }
    }
}
