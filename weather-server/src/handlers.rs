//! Request handlers. Each one is a single lookup wrapped in the success envelope.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::info;
use weather_core::{
    ForecastView, WeatherView,
    view::{CityAtmosphere, CityTemperature, CityWind},
};

use crate::{error::ApiError, state::AppState};

pub const TITLE: &str = "Weather API";
pub const DESCRIPTION: &str = "A simple weather API";

/// `{"status": "success", "data": ...}`
#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Json<Self> {
        Json(Self { status: "success", data })
    }
}

type ApiResult<T> = Result<Json<Success<T>>, ApiError>;

pub async fn current(State(state): State<AppState>, Path(city): Path<String>) -> ApiResult<WeatherView> {
    info!(%city, "current weather");
    Ok(Success::new(state.weather.current(&city).await?))
}

pub async fn temperature(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> ApiResult<CityTemperature> {
    info!(%city, "temperature");
    Ok(Success::new(state.weather.temperature(&city).await?))
}

pub async fn atmosphere(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> ApiResult<CityAtmosphere> {
    info!(%city, "atmosphere");
    Ok(Success::new(state.weather.atmosphere(&city).await?))
}

pub async fn wind(State(state): State<AppState>, Path(city): Path<String>) -> ApiResult<CityWind> {
    info!(%city, "wind");
    Ok(Success::new(state.weather.wind(&city).await?))
}

pub async fn forecast(State(state): State<AppState>, Path(city): Path<String>) -> ApiResult<ForecastView> {
    info!(%city, "forecast");
    Ok(Success::new(state.weather.forecast(&city).await?))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness check; never touches the provider.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo { title: TITLE, description: DESCRIPTION, version: env!("CARGO_PKG_VERSION") })
}
