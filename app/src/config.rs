use connectors::{coingecko, newsdata, openweather};

/// Runtime configuration, loaded from the environment.
///
/// API keys are intentionally not validated here: an absent key flows
/// through and surfaces as a request failure in the owning slice.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub market_api_url: String,
    pub weather_api_url: String,
    pub weather_api_key: String,
    pub news_api_url: String,
    pub news_api_key: String,
    /// Market-listing refresh period, seconds.
    pub crypto_poll_secs: u64,
    /// Synthetic price-alert period, seconds.
    pub price_alert_secs: u64,
    /// Synthetic weather-alert period, seconds.
    pub weather_alert_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            market_api_url: coingecko::COINGECKO_API_URL.to_string(),
            weather_api_url: openweather::OPENWEATHER_API_URL.to_string(),
            weather_api_key: String::new(),
            news_api_url: newsdata::NEWSDATA_API_URL.to_string(),
            news_api_key: String::new(),
            crypto_poll_secs: 60,
            price_alert_secs: 45,
            weather_alert_secs: 120,
        }
    }
}

fn env_or(name: &str, default: String) -> String {
    std::env::var(name).unwrap_or(default)
}

fn env_secs(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            market_api_url: env_or("MARKET_API_URL", defaults.market_api_url),
            weather_api_url: env_or("WEATHER_API_URL", defaults.weather_api_url),
            weather_api_key: env_or("WEATHER_API_KEY", defaults.weather_api_key),
            news_api_url: env_or("NEWS_API_URL", defaults.news_api_url),
            news_api_key: env_or("NEWS_API_KEY", defaults.news_api_key),
            crypto_poll_secs: env_secs("CRYPTO_POLL_SECS", defaults.crypto_poll_secs),
            price_alert_secs: env_secs("PRICE_ALERT_SECS", defaults.price_alert_secs),
            weather_alert_secs: env_secs("WEATHER_ALERT_SECS", defaults.weather_alert_secs),
        }
    }
}
