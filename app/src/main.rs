mod alerts;
mod config;
mod poller;
mod service;

use alerts::SyntheticAlerts;
use config::AppConfig;
use connectors::{
    coingecko::CoinGeckoConnector, newsdata::NewsDataConnector, openweather::OpenWeatherConnector,
};
use poller::Poller;
use service::DashboardService;
use std::sync::Arc;
use std::time::Duration;
use store::Store;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting CryptoWeather Nexus data-sync layer");

    let config = AppConfig::from_env();

    let store = Arc::new(Store::new());
    let market = Arc::new(CoinGeckoConnector::new(&config.market_api_url));
    let weather = Arc::new(OpenWeatherConnector::new(
        &config.weather_api_url,
        &config.weather_api_key,
    ));
    let news = Arc::new(NewsDataConnector::new(
        &config.news_api_url,
        &config.news_api_key,
    ));

    let service = Arc::new(DashboardService::new(store.clone(), market, weather, news));

    // Initial load: weather for the predefined cities and the current
    // news category. The market poll below covers the crypto listing.
    service.refresh_all_cities().await;
    let category = store.get_state().news.category;
    service.refresh_news(&category).await;

    let poller = Poller::start(service.clone(), &config);

    let synthetic = SyntheticAlerts::new(
        store.clone(),
        Duration::from_secs(config.price_alert_secs),
        Duration::from_secs(config.weather_alert_secs),
    );
    let alert_feed = alerts::spawn_alert_feed(store.clone(), synthetic);

    // Log a state summary on every dispatch.
    let mut updates = store.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            debug!(
                assets = state.crypto.list.len(),
                cities = state.weather.weather.len(),
                headlines = state.news.items.len(),
                unread = state.notifications.unread_count(),
                "state updated"
            );
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    poller.stop();
    alert_feed.abort();
    watcher.abort();

    Ok(())
}
