use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    WeatherError,
    config::{ProviderSettings, redact},
    model::{OwCurrentResponse, OwForecastResponse},
};

use super::WeatherProvider;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, settings: &ProviderSettings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self { api_key, base_url: settings.base_url.trim_end_matches('/').to_string(), http })
    }

    /// One GET against `{base_url}/{endpoint}`, decoded into `T`.
    ///
    /// No `units` parameter is sent, so temperatures come back in Kelvin.
    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, city: &str) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, city, "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                // The URL carries `appid`; keep it out of logs and responses.
                let e = e.without_url();
                warn!(error = %e, endpoint, "OpenWeather request failed");
                WeatherError::upstream(format!("Failed to send request to OpenWeather ({endpoint}): {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            let e = e.without_url();
            WeatherError::upstream(format!("Failed to read OpenWeather {endpoint} response body: {e}"))
        })?;

        if status == StatusCode::NOT_FOUND {
            debug!(city, "OpenWeather reports city not found");
            return Err(WeatherError::not_found(city, provider_message(&body).as_deref()));
        }

        if !status.is_success() {
            warn!(%status, endpoint, "OpenWeather returned an error status");
            return Err(WeatherError::upstream(format!(
                "OpenWeather {endpoint} request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        let json: Value = serde_json::from_str(&body)?;

        // Some error payloads arrive with a 200 and the real code in `cod`.
        if cod_is_not_found(&json) {
            return Err(WeatherError::not_found(city, json["message"].as_str()));
        }

        Ok(serde_json::from_value(json)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<OwCurrentResponse, WeatherError> {
        self.fetch("weather", city).await
    }

    async fn forecast(&self, city: &str) -> Result<OwForecastResponse, WeatherError> {
        self.fetch("forecast", city).await
    }
}

/// `cod` is a number on `/weather` and a string on `/forecast`.
fn cod_is_not_found(json: &Value) -> bool {
    match &json["cod"] {
        Value::Number(n) => n.as_u64() == Some(404),
        Value::String(s) => s == "404",
        _ => false,
    }
}

fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["message"].as_str().map(str::to_string))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
