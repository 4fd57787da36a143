//! Runtime configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI base endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default base for list thumbnail sprites, templated as `<base>/<id>.png`.
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Default number of entries fetched per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration with environment overrides.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base endpoint for API calls.
    pub api_base_url: String,
    /// Base endpoint for derived list thumbnail URLs.
    pub sprite_base_url: String,
    /// Page size used by the list store.
    pub page_size: u32,
    /// Timeout applied to every request by the shared HTTP client.
    pub request_timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Config {
    /// Creates Config from environment variables with defaults.
    ///
    /// Recognized variables: `POKEDEX_API_URL`, `POKEDEX_SPRITE_URL`,
    /// `POKEDEX_PAGE_SIZE`, `POKEDEX_TIMEOUT_SECS`. Unset or unparsable
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("POKEDEX_API_URL").unwrap_or(defaults.api_base_url),
            sprite_base_url: env::var("POKEDEX_SPRITE_URL").unwrap_or(defaults.sprite_base_url),
            page_size: env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_size),
            request_timeout: env::var("POKEDEX_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            user_agent: defaults.user_agent,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("pokedex/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
