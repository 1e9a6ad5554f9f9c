use crate::MarketDataProvider;
use async_trait::async_trait;
use common::{
    models::{CryptoAsset, CryptoDetails, CryptoHistoryPoint, MarketSnapshot},
    Error, Result,
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error};

pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// How many assets one listing fetch returns.
const LISTING_PAGE_SIZE: u32 = 20;

pub struct CoinGeckoConnector {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoConnector {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MarketCoin {
    id: String,
    symbol: String,
    name: String,
    image: Option<String>,
    current_price: Option<f64>,
    market_cap: Option<f64>,
    market_cap_rank: Option<u64>,
    total_volume: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    circulating_supply: Option<f64>,
    total_supply: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MarketChart {
    /// `[epoch_millis, price]` pairs, ascending.
    prices: Vec<(f64, f64)>,
}

#[derive(Debug, Deserialize)]
struct CoinDetail {
    id: String,
    symbol: String,
    name: String,
    description: Option<LocalizedText>,
    links: Option<Links>,
    genesis_date: Option<String>,
    market_data: Option<MarketData>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    en: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Links {
    #[serde(default)]
    homepage: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MarketData {
    #[serde(default)]
    current_price: HashMap<String, f64>,
    #[serde(default)]
    market_cap: HashMap<String, f64>,
    price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    ath: HashMap<String, f64>,
    #[serde(default)]
    atl: HashMap<String, f64>,
}

fn normalize_market_coin(coin: MarketCoin) -> CryptoAsset {
    CryptoAsset {
        id: coin.id,
        rank: coin
            .market_cap_rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "0".to_string()),
        symbol: coin.symbol.to_uppercase(),
        name: coin.name,
        supply: coin
            .circulating_supply
            .map(|s| s.to_string())
            .unwrap_or_else(|| "0".to_string()),
        max_supply: coin.total_supply.map(|s| s.to_string()),
        market_cap_usd: coin.market_cap.unwrap_or_default().to_string(),
        volume_usd_24h: coin.total_volume.unwrap_or_default().to_string(),
        price_usd: coin.current_price.unwrap_or_default().to_string(),
        change_percent_24h: coin
            .price_change_percentage_24h
            .map(|c| c.to_string())
            .unwrap_or_else(|| "0".to_string()),
        image: coin.image,
    }
}

fn normalize_chart(chart: MarketChart) -> Vec<CryptoHistoryPoint> {
    let mut points: Vec<CryptoHistoryPoint> = chart
        .prices
        .into_iter()
        .map(|(ts, price)| CryptoHistoryPoint {
            timestamp: ts as i64,
            price,
        })
        .collect();

    // Providers serve this ascending already; enforce it anyway.
    points.sort_by_key(|p| p.timestamp);
    points
}

fn normalize_detail(detail: CoinDetail) -> Result<CryptoDetails> {
    let market_data = detail
        .market_data
        .ok_or_else(|| Error::Decode("coin detail is missing market_data".to_string()))?;

    Ok(CryptoDetails {
        id: detail.id,
        symbol: detail.symbol.to_uppercase(),
        name: detail.name,
        description: detail
            .description
            .and_then(|d| d.en)
            .unwrap_or_default(),
        homepage: detail
            .links
            .and_then(|l| l.homepage.into_iter().find(|url| !url.is_empty())),
        genesis_date: detail.genesis_date,
        market_data: MarketSnapshot {
            price_usd: market_data.current_price.get("usd").copied().unwrap_or_default(),
            market_cap_usd: market_data.market_cap.get("usd").copied().unwrap_or_default(),
            change_percent_24h: market_data.price_change_percentage_24h.unwrap_or_default(),
            ath_usd: market_data.ath.get("usd").copied().unwrap_or_default(),
            atl_usd: market_data.atl.get("usd").copied().unwrap_or_default(),
        },
    })
}

#[async_trait]
impl MarketDataProvider for CoinGeckoConnector {
    async fn list_assets(&self) -> Result<Vec<CryptoAsset>> {
        let url = format!("{}/coins/markets", self.base_url);

        debug!("Fetching asset listing: {}", url);

        let per_page = LISTING_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", "usd"),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Market API error: {} - {}", status, error_text);
            return Err(Error::Provider(format!("API error: {}", status.as_u16())));
        }

        let coins: Vec<MarketCoin> = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("failed to parse asset listing: {}", e)))?;

        Ok(coins.into_iter().map(normalize_market_coin).collect())
    }

    async fn price_history(&self, asset_id: &str, days: u32) -> Result<Vec<CryptoHistoryPoint>> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, asset_id);

        debug!("Fetching price history: {} (days: {})", url, days);

        let response = self
            .client
            .get(&url)
            .query(&[("vs_currency", "usd".to_string()), ("days", days.to_string())])
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Market API error: {} - {}", status, error_text);
            return Err(Error::Provider(format!("API error: {}", status.as_u16())));
        }

        let chart: MarketChart = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("failed to parse market chart: {}", e)))?;

        Ok(normalize_chart(chart))
    }

    async fn asset_details(&self, asset_id: &str) -> Result<CryptoDetails> {
        let url = format!("{}/coins/{}", self.base_url, asset_id);

        debug!("Fetching asset details: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("localization", "false"),
                ("tickers", "false"),
                ("market_data", "true"),
                ("community_data", "false"),
                ("developer_data", "false"),
            ])
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Market API error: {} - {}", status, error_text);
            return Err(Error::Provider(format!("API error: {}", status.as_u16())));
        }

        let detail: CoinDetail = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("failed to parse asset details: {}", e)))?;

        normalize_detail(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_market_listing_row() {
        let raw = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://example.com/btc.png",
            "current_price": 67432.12,
            "market_cap": 1330000000000.0,
            "market_cap_rank": 1,
            "total_volume": 28700000000.0,
            "price_change_percentage_24h": -1.52,
            "circulating_supply": 19700000.0,
            "total_supply": 21000000.0
        }"#;

        let coin: MarketCoin = serde_json::from_str(raw).unwrap();
        let asset = normalize_market_coin(coin);

        assert_eq!(asset.id, "bitcoin");
        assert_eq!(asset.rank, "1");
        assert_eq!(asset.symbol, "BTC");
        assert_eq!(asset.price_usd, "67432.12");
        assert_eq!(asset.change_percent_24h, "-1.52");
        assert_eq!(asset.max_supply.as_deref(), Some("21000000"));
        assert_eq!(asset.image.as_deref(), Some("https://example.com/btc.png"));
    }

    #[test]
    fn defaults_missing_listing_fields() {
        let raw = r#"{"id": "obscurecoin", "symbol": "obs", "name": "Obscure"}"#;

        let coin: MarketCoin = serde_json::from_str(raw).unwrap();
        let asset = normalize_market_coin(coin);

        assert_eq!(asset.rank, "0");
        assert_eq!(asset.supply, "0");
        assert_eq!(asset.change_percent_24h, "0");
        assert!(asset.max_supply.is_none());
        assert!(asset.image.is_none());
    }

    #[test]
    fn chart_points_are_ascending() {
        let raw = r#"{"prices": [[1700000120000.0, 101.5], [1700000000000.0, 100.0]]}"#;

        let chart: MarketChart = serde_json::from_str(raw).unwrap();
        let points = normalize_chart(chart);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp, 1700000000000);
        assert_eq!(points[0].price, 100.0);
        assert_eq!(points[1].timestamp, 1700000120000);
    }

    #[test]
    fn detail_without_market_data_is_a_decode_error() {
        let raw = r#"{"id": "bitcoin", "symbol": "btc", "name": "Bitcoin"}"#;

        let detail: CoinDetail = serde_json::from_str(raw).unwrap();
        let err = normalize_detail(detail).unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn normalizes_detail_record() {
        let raw = r#"{
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "description": {"en": "A smart-contract platform."},
            "links": {"homepage": ["", "https://ethereum.org"]},
            "genesis_date": "2015-07-30",
            "market_data": {
                "current_price": {"usd": 3520.4, "eur": 3250.0},
                "market_cap": {"usd": 423000000000.0},
                "price_change_percentage_24h": 2.1,
                "ath": {"usd": 4878.26},
                "atl": {"usd": 0.432979}
            }
        }"#;

        let detail: CoinDetail = serde_json::from_str(raw).unwrap();
        let details = normalize_detail(detail).unwrap();

        assert_eq!(details.symbol, "ETH");
        assert_eq!(details.homepage.as_deref(), Some("https://ethereum.org"));
        assert_eq!(details.market_data.price_usd, 3520.4);
        assert_eq!(details.market_data.ath_usd, 4878.26);
    }
}
