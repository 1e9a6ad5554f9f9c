use connectors::{MarketDataProvider, NewsProvider, WeatherProvider};
use futures::future::join_all;
use std::sync::Arc;
use store::crypto::CryptoAction;
use store::news::NewsAction;
use store::weather::WeatherAction;
use store::{Action, Store};
use tracing::{debug, warn};

/// Binds the provider clients to the store: every operation dispatches
/// the pending action, awaits the provider, and dispatches exactly one
/// terminal action. Failures are absorbed into slice state and logged;
/// nothing here returns an error or panics.
pub struct DashboardService {
    store: Arc<Store>,
    market: Arc<dyn MarketDataProvider>,
    weather: Arc<dyn WeatherProvider>,
    news: Arc<dyn NewsProvider>,
}

impl DashboardService {
    pub fn new(
        store: Arc<Store>,
        market: Arc<dyn MarketDataProvider>,
        weather: Arc<dyn WeatherProvider>,
        news: Arc<dyn NewsProvider>,
    ) -> Self {
        Self {
            store,
            market,
            weather,
            news,
        }
    }

    pub async fn refresh_crypto_list(&self) {
        self.store.dispatch(Action::Crypto(CryptoAction::ListPending));

        match self.market.list_assets().await {
            Ok(assets) => {
                debug!(count = assets.len(), "asset listing refreshed");
                self.store
                    .dispatch(Action::Crypto(CryptoAction::ListFulfilled(assets)));
            }
            Err(e) => {
                warn!("asset listing fetch failed: {}", e);
                self.store
                    .dispatch(Action::Crypto(CryptoAction::ListRejected(e.to_string())));
            }
        }
    }

    pub async fn load_crypto_history(&self, asset_id: &str, days: u32) {
        self.store
            .dispatch(Action::Crypto(CryptoAction::HistoryPending));

        match self.market.price_history(asset_id, days).await {
            Ok(points) => {
                debug!(asset_id, count = points.len(), "price history loaded");
                self.store
                    .dispatch(Action::Crypto(CryptoAction::HistoryFulfilled(points)));
            }
            Err(e) => {
                warn!(asset_id, "price history fetch failed: {}", e);
                self.store
                    .dispatch(Action::Crypto(CryptoAction::HistoryRejected(e.to_string())));
            }
        }
    }

    pub async fn load_crypto_details(&self, asset_id: &str) {
        self.store
            .dispatch(Action::Crypto(CryptoAction::DetailsPending));

        match self.market.asset_details(asset_id).await {
            Ok(details) => {
                debug!(asset_id, "asset details loaded");
                self.store
                    .dispatch(Action::Crypto(CryptoAction::DetailsFulfilled(Box::new(
                        details,
                    ))));
            }
            Err(e) => {
                warn!(asset_id, "asset details fetch failed: {}", e);
                self.store
                    .dispatch(Action::Crypto(CryptoAction::DetailsRejected(e.to_string())));
            }
        }
    }

    /// Fetch current conditions for one city. The slice entry is keyed
    /// by the exact string passed here, not by the provider's reported
    /// city name.
    pub async fn refresh_weather(&self, city: &str) {
        self.store.dispatch(Action::Weather(WeatherAction::Pending));

        match self.weather.current(city).await {
            Ok(record) => {
                debug!(city, "weather refreshed");
                self.store.dispatch(Action::Weather(WeatherAction::Fulfilled {
                    city: city.to_string(),
                    record: Box::new(record),
                }));
            }
            Err(e) => {
                warn!(city, "weather fetch failed: {}", e);
                self.store
                    .dispatch(Action::Weather(WeatherAction::Rejected(e.to_string())));
            }
        }
    }

    /// Fetch every predefined city concurrently; resolves after all of
    /// them settle. One city failing does not abort the others, and the
    /// slice's outstanding-request counter keeps it loading until the
    /// last settle.
    pub async fn refresh_all_cities(&self) {
        let cities = self.store.get_state().weather.predefined_cities;
        debug!(count = cities.len(), "refreshing predefined cities");

        join_all(cities.iter().map(|city| self.refresh_weather(city))).await;
    }

    pub async fn refresh_news(&self, category: &str) {
        self.store.dispatch(Action::News(NewsAction::Pending));

        match self.news.latest(category).await {
            Ok(items) => {
                debug!(category, count = items.len(), "news refreshed");
                self.store
                    .dispatch(Action::News(NewsAction::Fulfilled(items)));
            }
            Err(e) => {
                warn!(category, "news fetch failed: {}", e);
                self.store
                    .dispatch(Action::News(NewsAction::Rejected(e.to_string())));
            }
        }
    }
}
