use common::models::WeatherRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The initial set of weather-tracked locations.
pub const PREDEFINED_CITIES: [&str; 3] = ["New York", "London", "Tokyo"];

/// Weather slice: one record per city, keyed by the exact string the
/// fetch was issued with. The map only accumulates; a failed city fetch
/// never evicts an earlier success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherState {
    pub weather: HashMap<String, WeatherRecord>,
    pub selected_city: String,
    pub predefined_cities: Vec<String>,
    in_flight: u32,
    pub error: Option<String>,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            weather: HashMap::new(),
            selected_city: PREDEFINED_CITIES[0].to_string(),
            predefined_cities: PREDEFINED_CITIES.iter().map(|c| c.to_string()).collect(),
            in_flight: 0,
            error: None,
        }
    }
}

impl WeatherState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Clone)]
pub enum WeatherAction {
    Pending,
    Fulfilled {
        city: String,
        record: Box<WeatherRecord>,
    },
    Rejected(String),
    SetSelectedCity(String),
    AddPredefinedCity(String),
    RemovePredefinedCity(String),
}

pub(crate) fn apply(state: &mut WeatherState, action: WeatherAction) {
    match action {
        WeatherAction::Pending => {
            state.in_flight += 1;
            state.error = None;
        }
        WeatherAction::Fulfilled { city, record } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.error = None;
            state.weather.insert(city, *record);
        }
        WeatherAction::Rejected(message) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.error = Some(message);
        }
        WeatherAction::SetSelectedCity(city) => {
            state.selected_city = city;
        }
        WeatherAction::AddPredefinedCity(city) => {
            if !state.predefined_cities.contains(&city) {
                state.predefined_cities.push(city);
            }
        }
        WeatherAction::RemovePredefinedCity(city) => {
            state.predefined_cities.retain(|c| c != &city);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::{Conditions, SysInfo, WeatherMain, Wind};

    fn record(name: &str, temp: f64) -> WeatherRecord {
        WeatherRecord {
            name: name.to_string(),
            dt: 1724580000,
            main: WeatherMain {
                temp,
                feels_like: temp,
                humidity: 70,
                pressure: 1014,
            },
            wind: Wind { speed: 4.6 },
            conditions: Conditions {
                description: "cloudy".to_string(),
                icon: "04d".to_string(),
            },
            sys: SysInfo {
                country: None,
                sunrise: 0,
                sunset: 0,
            },
        }
    }

    #[test]
    fn fulfilled_adds_a_map_entry() {
        let mut state = WeatherState::default();
        apply(&mut state, WeatherAction::Pending);
        apply(
            &mut state,
            WeatherAction::Fulfilled {
                city: "London".to_string(),
                record: Box::new(record("London", 15.0)),
            },
        );

        assert!(!state.is_loading());
        assert!(state.error.is_none());
        assert_eq!(state.weather["London"].main.temp, 15.0);
    }

    #[test]
    fn entries_accumulate_across_cities() {
        let mut state = WeatherState::default();
        for (city, temp) in [("London", 15.0), ("Tokyo", 28.5)] {
            apply(&mut state, WeatherAction::Pending);
            apply(
                &mut state,
                WeatherAction::Fulfilled {
                    city: city.to_string(),
                    record: Box::new(record(city, temp)),
                },
            );
        }

        assert_eq!(state.weather.len(), 2);
    }

    #[test]
    fn rejection_leaves_existing_entries() {
        let mut state = WeatherState::default();
        apply(&mut state, WeatherAction::Pending);
        apply(
            &mut state,
            WeatherAction::Fulfilled {
                city: "London".to_string(),
                record: Box::new(record("London", 15.0)),
            },
        );

        apply(&mut state, WeatherAction::Pending);
        apply(&mut state, WeatherAction::Rejected("API error: 404".to_string()));

        assert_eq!(state.weather.len(), 1);
        assert_eq!(state.error.as_deref(), Some("API error: 404"));
    }

    #[test]
    fn loading_tracks_concurrent_city_fetches() {
        let mut state = WeatherState::default();
        apply(&mut state, WeatherAction::Pending);
        apply(&mut state, WeatherAction::Pending);
        apply(&mut state, WeatherAction::Pending);

        apply(
            &mut state,
            WeatherAction::Fulfilled {
                city: "New York".to_string(),
                record: Box::new(record("New York", 22.0)),
            },
        );
        assert!(state.is_loading());

        apply(&mut state, WeatherAction::Rejected("API error: 500".to_string()));
        assert!(state.is_loading());

        apply(
            &mut state,
            WeatherAction::Fulfilled {
                city: "London".to_string(),
                record: Box::new(record("London", 15.0)),
            },
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn predefined_cities_add_is_duplicate_free() {
        let mut state = WeatherState::default();
        apply(&mut state, WeatherAction::AddPredefinedCity("Paris".to_string()));
        apply(&mut state, WeatherAction::AddPredefinedCity("Paris".to_string()));

        assert_eq!(
            state.predefined_cities,
            vec!["New York", "London", "Tokyo", "Paris"]
        );

        apply(
            &mut state,
            WeatherAction::RemovePredefinedCity("Tokyo".to_string()),
        );
        assert_eq!(state.predefined_cities, vec!["New York", "London", "Paris"]);
    }
}
