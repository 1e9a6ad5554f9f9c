pub mod coingecko;
pub mod newsdata;
pub mod openweather;

use async_trait::async_trait;
use common::{
    models::{CryptoAsset, CryptoDetails, CryptoHistoryPoint, NewsItem, WeatherRecord},
    Result,
};

/// Trait defining the interface for market-data API clients.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// List the top assets by market cap, normalized.
    async fn list_assets(&self) -> Result<Vec<CryptoAsset>>;

    /// Price history for one asset over the trailing `days` days,
    /// ascending by timestamp.
    async fn price_history(&self, asset_id: &str, days: u32) -> Result<Vec<CryptoHistoryPoint>>;

    /// Full-detail record for one asset.
    async fn asset_details(&self, asset_id: &str) -> Result<CryptoDetails>;
}

/// Trait defining the interface for weather API clients.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for one city, metric units.
    async fn current(&self, city: &str) -> Result<WeatherRecord>;
}

/// Trait defining the interface for news API clients.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Latest headlines for one category, normalized.
    async fn latest(&self, category: &str) -> Result<Vec<NewsItem>>;
}
