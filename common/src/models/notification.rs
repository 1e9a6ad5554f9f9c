use serde::{Deserialize, Serialize};

/// Alert kinds surfaced in the notification log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationKind {
    #[serde(rename = "price_alert")]
    PriceAlert,
    #[serde(rename = "weather_alert")]
    WeatherAlert,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::PriceAlert => write!(f, "price_alert"),
            NotificationKind::WeatherAlert => write!(f, "weather_alert"),
        }
    }
}

/// One entry of the bounded, newest-first notification log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Creation epoch-millis string with a sequence suffix, unique per
    /// store instance.
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    /// Creation time, epoch millis.
    pub timestamp: i64,
    pub read: bool,
}
