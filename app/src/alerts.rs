use async_trait::async_trait;
use common::models::NotificationKind;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval};
use store::notifications::NotificationsAction;
use store::{Action, Store};
use tracing::info;

/// One event destined for the notification log.
#[derive(Debug, Clone)]
pub struct AlertEvent {
    pub kind: NotificationKind,
    pub message: String,
}

/// Source of alert events. The notifications slice doesn't care where
/// events come from; a real upstream feed and the synthetic generator
/// below are interchangeable behind this trait.
#[async_trait]
pub trait AlertSource: Send {
    /// The next event, or `None` once the feed is exhausted.
    async fn next_event(&mut self) -> Option<AlertEvent>;
}

/// Timer-driven synthetic feed: periodic price movements for one of the
/// top listed assets, and canned weather events.
pub struct SyntheticAlerts {
    store: Arc<Store>,
    price_ticker: Interval,
    weather_ticker: Interval,
}

const WEATHER_EVENTS: [&str; 5] = [
    "Heavy rain expected in New York",
    "Heat wave alert for London",
    "Thunderstorm warning for Tokyo",
    "Strong winds expected in Paris",
    "Snowfall warning for Moscow",
];

impl SyntheticAlerts {
    pub fn new(store: Arc<Store>, price_period: Duration, weather_period: Duration) -> Self {
        Self {
            store,
            price_ticker: time::interval_at(Instant::now() + price_period, price_period),
            weather_ticker: time::interval_at(Instant::now() + weather_period, weather_period),
        }
    }

    /// None when the listing is still empty.
    fn price_event(&self) -> Option<AlertEvent> {
        let list = self.store.get_state().crypto.list;
        if list.is_empty() {
            return None;
        }

        let mut rng = rand::thread_rng();
        let asset = &list[rng.gen_range(0..list.len().min(3))];
        let direction = if rng.gen_bool(0.5) { "up" } else { "down" };
        let percent: f64 = rng.gen_range(1.0..6.0);

        Some(AlertEvent {
            kind: NotificationKind::PriceAlert,
            message: format!(
                "{} ({}) price {} by {:.2}%",
                asset.name, asset.symbol, direction, percent
            ),
        })
    }

    fn weather_event(&self) -> AlertEvent {
        let pick = rand::thread_rng().gen_range(0..WEATHER_EVENTS.len());
        AlertEvent {
            kind: NotificationKind::WeatherAlert,
            message: WEATHER_EVENTS[pick].to_string(),
        }
    }
}

#[async_trait]
impl AlertSource for SyntheticAlerts {
    async fn next_event(&mut self) -> Option<AlertEvent> {
        loop {
            tokio::select! {
                _ = self.price_ticker.tick() => {
                    if let Some(event) = self.price_event() {
                        return Some(event);
                    }
                }
                _ = self.weather_ticker.tick() => {
                    return Some(self.weather_event());
                }
            }
        }
    }
}

/// Drain an alert source into the notifications slice.
pub fn spawn_alert_feed(
    store: Arc<Store>,
    mut source: impl AlertSource + 'static,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = source.next_event().await {
            info!(kind = %event.kind, "alert: {}", event.message);
            store.dispatch(Action::Notifications(NotificationsAction::Push {
                kind: event.kind,
                message: event.message,
            }));
        }
    })
}
