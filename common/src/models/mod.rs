mod crypto;
mod news;
mod notification;
mod weather;

pub use crypto::{CryptoAsset, CryptoDetails, CryptoHistoryPoint, MarketSnapshot};
pub use news::NewsItem;
pub use notification::{Notification, NotificationKind};
pub use weather::{Conditions, SysInfo, WeatherMain, WeatherRecord, Wind};
