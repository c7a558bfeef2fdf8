use std::env;

/// Forecast endpoint of the free OpenWeatherMap API (5 day / 3 hour).
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/forecast";

/// Environment variable holding the provider API credential.
pub const API_KEY_VAR: &str = "WEATHER_KEY";

/// Runtime configuration, built once at startup and passed explicitly to the
/// client. No config file is read and nothing is stored globally.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the provider forecast endpoint.
    pub base_url: String,

    /// Provider API key. May be empty when `WEATHER_KEY` is unset; the
    /// provider then rejects the request and it surfaces as a fetch error.
    pub api_key: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into() }
    }

    /// Build the default configuration: the real provider endpoint and the
    /// API key from the `WEATHER_KEY` environment variable.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        Self::new(DEFAULT_BASE_URL, api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_explicit_values() {
        let cfg = Config::new("http://localhost:8080/forecast", "TEST_KEY");

        assert_eq!(cfg.base_url, "http://localhost:8080/forecast");
        assert_eq!(cfg.api_key, "TEST_KEY");
    }

    #[test]
    fn from_env_uses_provider_endpoint() {
        let cfg = Config::from_env();

        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
