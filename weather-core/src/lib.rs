//! Core library for the weather proxy.
//!
//! This crate defines:
//! - Configuration (file + environment)
//! - The OpenWeatherMap provider behind the `WeatherProvider` trait
//! - Normalization of provider payloads into stable views, with unit conversion
//! - The two-kind `WeatherError`
//!
//! It is used by `weather-server`, but has no dependency on any HTTP framework.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod service;
pub mod units;
pub mod view;

pub use config::{Config, ProviderSettings, ServerSettings};
pub use error::WeatherError;
pub use normalize::{normalize, normalize_forecast};
pub use provider::{WeatherProvider, provider_from_config};
pub use service::WeatherService;
pub use view::{ForecastView, Reading, WeatherView};
