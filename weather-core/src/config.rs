use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};

/// Environment variable holding the OpenWeatherMap key.
pub const API_KEY_ENV: &str = "OPEN_WEATHER_API_KEY";
/// Environment variable holding the route prefix.
pub const API_URL_ENV: &str = "API_URL";

/// Where the HTTP server listens and under which prefix it mounts its routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Example: "/api/v1". Empty means routes live at the root.
    pub api_prefix: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8000, api_prefix: String::new() }
    }
}

/// Outbound OpenWeatherMap settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self { base_url: "https://api.openweathermap.org/data/2.5".to_string(), timeout_secs: 10 }
    }
}

/// Top-level configuration, built once at startup and passed around explicitly.
///
/// Example TOML:
/// [server]
/// port = 8080
/// api_prefix = "/api/v1"
///
/// [provider]
/// timeout_secs = 5
///
/// The API key is never read from the file, only from the environment.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub api_key: String,
    pub server: ServerSettings,
    pub provider: ProviderSettings,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &redact(&self.api_key))
            .field("server", &self.server)
            .field("provider", &self.provider)
            .finish()
    }
}

/// What `Debug` shows in place of a secret.
pub(crate) fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

impl Config {
    /// A config with defaults everywhere except the key. Handy for tests and embedding.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), ..Self::default() }
    }

    /// Load the file (explicit path, else the platform default if it exists),
    /// then overlay the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Self::config_file_path()?;
                if default_path.exists() { Self::from_file(&default_path)? } else { Self::default() }
            }
        };

        cfg.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply `OPEN_WEATHER_API_KEY` and `API_URL` from `lookup`.
    ///
    /// A missing or blank key is an error: the server cannot do anything without it.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let key = lookup(API_KEY_ENV)
            .map(|k| k.trim().trim_matches('"').to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("{API_KEY_ENV} is not set.\nHint: export your OpenWeatherMap API key before starting the server."))?;
        self.api_key = key;

        if let Some(prefix) = lookup(API_URL_ENV) {
            self.server.api_prefix = prefix;
        }
        self.server.api_prefix = normalize_prefix(&self.server.api_prefix);

        Ok(self)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-proxy", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// `"api/v1/"` -> `"/api/v1"`, `"/"` -> `""`.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::default().with_env(env(&[])).unwrap_err();
        assert!(err.to_string().contains("OPEN_WEATHER_API_KEY is not set"));

        let err = Config::default().with_env(env(&[(API_KEY_ENV, "\"\"")])).unwrap_err();
        assert!(err.to_string().contains("is not set"));
    }

    #[test]
    fn api_key_quotes_are_stripped() {
        let cfg = Config::default().with_env(env(&[(API_KEY_ENV, "\"abc123\"")])).unwrap();
        assert_eq!(cfg.api_key, "abc123");
    }

    #[test]
    fn api_url_env_overrides_file_prefix() {
        let mut cfg = Config::default();
        cfg.server.api_prefix = "/from-file".into();

        let cfg = cfg.with_env(env(&[(API_KEY_ENV, "k"), (API_URL_ENV, "api/v2/")])).unwrap();
        assert_eq!(cfg.server.api_prefix, "/api/v2");
    }

    #[test]
    fn prefix_normalization() {
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix("/api"), "/api");
        assert_eq!(normalize_prefix("api/v1/"), "/api/v1");
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let cfg: Config = toml::from_str("[server]\nport = 9000\n").unwrap();

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.provider, ProviderSettings::default());
        assert!(cfg.api_key.is_empty());
    }

    #[test]
    fn debug_output_hides_api_key() {
        let cfg = Config::with_api_key("SECRET_KEY_123");
        let printed = format!("{cfg:?}");

        assert!(!printed.contains("SECRET_KEY_123"));
        assert!(printed.contains("<redacted>"));
        assert!(format!("{:?}", Config::default()).contains("<unset>"));
    }

    #[test]
    fn api_key_is_never_read_from_file() {
        let cfg: Config = toml::from_str("api_key = \"leaked\"\n").unwrap();
        assert!(cfg.api_key.is_empty());
    }
}
