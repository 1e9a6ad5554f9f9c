use crate::WeatherProvider;
use async_trait::async_trait;
use common::{
    models::{Conditions, SysInfo, WeatherMain, WeatherRecord, Wind},
    Error, Result,
};
use serde::Deserialize;
use tracing::{debug, error};

pub const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";

pub struct OpenWeatherConnector {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherConnector {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    dt: i64,
    main: RawMain,
    wind: RawWind,
    weather: Vec<RawConditions>,
    sys: RawSys,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct RawWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct RawConditions {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize, Default)]
struct RawSys {
    country: Option<String>,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

fn normalize_weather(resp: WeatherResponse) -> Result<WeatherRecord> {
    let conditions = resp
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| Error::Decode("weather response has no conditions entry".to_string()))?;

    Ok(WeatherRecord {
        name: resp.name,
        dt: resp.dt,
        main: WeatherMain {
            temp: resp.main.temp,
            feels_like: resp.main.feels_like,
            humidity: resp.main.humidity,
            pressure: resp.main.pressure,
        },
        wind: Wind {
            speed: resp.wind.speed,
        },
        conditions: Conditions {
            description: conditions.description,
            icon: conditions.icon,
        },
        sys: SysInfo {
            country: resp.sys.country,
            sunrise: resp.sys.sunrise,
            sunset: resp.sys.sunset,
        },
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherConnector {
    async fn current(&self, city: &str) -> Result<WeatherRecord> {
        let url = format!("{}/weather", self.base_url);

        debug!("Fetching current weather for {}", city);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("units", "metric"), ("appid", &self.api_key)])
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Weather API error: {} - {}", status, error_text);
            return Err(Error::Provider(format!("API error: {}", status.as_u16())));
        }

        let raw: WeatherResponse = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("failed to parse weather response: {}", e)))?;

        normalize_weather(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "name": "London",
        "dt": 1724580000,
        "main": {"temp": 15.0, "feels_like": 14.2, "humidity": 70, "pressure": 1014},
        "wind": {"speed": 4.6},
        "weather": [{"description": "cloudy", "icon": "04d"}],
        "sys": {"country": "GB", "sunrise": 1724558000, "sunset": 1724608000}
    }"#;

    #[test]
    fn normalizes_current_conditions() {
        let raw: WeatherResponse = serde_json::from_str(LONDON).unwrap();
        let record = normalize_weather(raw).unwrap();

        assert_eq!(record.name, "London");
        assert_eq!(record.main.temp, 15.0);
        assert_eq!(record.main.humidity, 70);
        assert_eq!(record.conditions.description, "cloudy");
        assert_eq!(record.conditions.icon, "04d");
        assert_eq!(record.sys.country.as_deref(), Some("GB"));
    }

    #[test]
    fn empty_conditions_array_is_a_decode_error() {
        let raw: WeatherResponse = serde_json::from_str(
            r#"{
                "name": "Nowhere",
                "dt": 0,
                "main": {"temp": 1.0, "humidity": 50, "pressure": 1000},
                "wind": {"speed": 0.0},
                "weather": [],
                "sys": {}
            }"#,
        )
        .unwrap();

        assert!(matches!(normalize_weather(raw), Err(Error::Decode(_))));
    }

    #[test]
    fn malformed_payload_fails_to_decode() {
        let result = serde_json::from_str::<WeatherResponse>(r#"{"name": "London"}"#);
        assert!(result.is_err());
    }
}
