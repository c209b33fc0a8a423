use thiserror::Error;

/// The two ways a weather lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The provider could not resolve the city.
    #[error("{message}")]
    NotFound { city: String, message: String },

    /// Anything else: transport failure, unexpected status, malformed payload.
    #[error("{0}")]
    Upstream(String),
}

impl WeatherError {
    /// `NotFound` with the provider's own message, or a generic one when it sent none.
    pub fn not_found(city: &str, message: Option<&str>) -> Self {
        let message = match message {
            Some(m) if !m.trim().is_empty() => m.to_string(),
            _ => format!("city not found: {city}"),
        };

        WeatherError::NotFound { city: city.to_string(), message }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        WeatherError::Upstream(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound { .. })
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Upstream(format!("Failed to parse OpenWeather JSON: {err}"))
    }
}
