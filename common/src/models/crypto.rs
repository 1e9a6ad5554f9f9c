use serde::{Deserialize, Serialize};

/// One row of the market listing, normalized from the provider's
/// `/coins/markets` response. Numeric fields are kept as decimal
/// strings, matching what the upstream serves and what the view layer
/// formats directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CryptoAsset {
    /// Provider-assigned slug (e.g., "bitcoin"); the identity key.
    pub id: String,
    /// Market-cap rank, as a string ("0" when the provider omits it).
    pub rank: String,
    /// Ticker symbol, uppercased (e.g., "BTC").
    pub symbol: String,
    /// Human-readable name (e.g., "Bitcoin").
    pub name: String,
    /// Circulating supply.
    pub supply: String,
    /// Total supply, when the provider reports one.
    pub max_supply: Option<String>,
    pub market_cap_usd: String,
    pub volume_usd_24h: String,
    pub price_usd: String,
    pub change_percent_24h: String,
    /// Logo URL, when available.
    pub image: Option<String>,
}

/// One point of a price history series: epoch millis and price in USD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CryptoHistoryPoint {
    pub timestamp: i64,
    pub price: f64,
}

/// Full-detail record for a single asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CryptoDetails {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub homepage: Option<String>,
    pub genesis_date: Option<String>,
    pub market_data: MarketSnapshot,
}

/// USD market figures embedded in a details record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketSnapshot {
    pub price_usd: f64,
    pub market_cap_usd: f64,
    pub change_percent_24h: f64,
    /// All-time high in USD.
    pub ath_usd: f64,
    /// All-time low in USD.
    pub atl_usd: f64,
}
