use serde::{Deserialize, Serialize};

/// Current-conditions snapshot for one city, normalized from the
/// weather provider's `/weather` response. The nesting mirrors the
/// provider shape (`main`, `wind`, `sys`) so consumers address fields
/// the same way the raw payload does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherRecord {
    /// City name as reported by the provider.
    pub name: String,
    /// Observation time, epoch seconds.
    pub dt: i64,
    pub main: WeatherMain,
    pub wind: Wind,
    pub conditions: Conditions,
    pub sys: SysInfo,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherMain {
    /// Temperature in metric units (°C).
    pub temp: f64,
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Atmospheric pressure, hPa.
    pub pressure: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    /// Wind speed in metric units (m/s).
    pub speed: f64,
}

/// The leading entry of the provider's `weather` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conditions {
    pub description: String,
    /// Provider icon code (e.g., "04d").
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SysInfo {
    /// ISO country code, when reported.
    pub country: Option<String>,
    /// Sunrise, epoch seconds.
    pub sunrise: i64,
    /// Sunset, epoch seconds.
    pub sunset: i64,
}
