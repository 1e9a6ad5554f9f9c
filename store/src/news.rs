use common::models::NewsItem;
use serde::{Deserialize, Serialize};

/// News slice: the current category's headlines, replaced wholesale on
/// every fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsState {
    pub items: Vec<NewsItem>,
    pub category: String,
    in_flight: u32,
    pub error: Option<String>,
}

impl Default for NewsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            category: "crypto".to_string(),
            in_flight: 0,
            error: None,
        }
    }
}

impl NewsState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Clone)]
pub enum NewsAction {
    Pending,
    Fulfilled(Vec<NewsItem>),
    Rejected(String),
    SetCategory(String),
}

pub(crate) fn apply(state: &mut NewsState, action: NewsAction) {
    match action {
        NewsAction::Pending => {
            state.in_flight += 1;
            state.error = None;
        }
        NewsAction::Fulfilled(items) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.error = None;
            state.items = items;
        }
        NewsAction::Rejected(message) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.error = Some(message);
        }
        NewsAction::SetCategory(category) => {
            state.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            description: None,
            content: None,
            url: "https://example.com".to_string(),
            image_url: None,
            source_id: "example".to_string(),
            category: vec!["crypto".to_string()],
            published_at: "2026-08-25 09:00:00".to_string(),
        }
    }

    #[test]
    fn fulfilled_replaces_items_wholesale() {
        let mut state = NewsState::default();
        apply(&mut state, NewsAction::Pending);
        apply(&mut state, NewsAction::Fulfilled(vec![item("a"), item("b")]));

        apply(&mut state, NewsAction::Pending);
        apply(&mut state, NewsAction::Fulfilled(vec![item("c")]));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "c");
        assert!(!state.is_loading());
    }

    #[test]
    fn rejection_preserves_last_headlines() {
        let mut state = NewsState::default();
        apply(&mut state, NewsAction::Pending);
        apply(&mut state, NewsAction::Fulfilled(vec![item("a")]));

        apply(&mut state, NewsAction::Pending);
        apply(&mut state, NewsAction::Rejected("Failed to fetch news".to_string()));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch news"));
    }

    #[test]
    fn category_switch_is_synchronous() {
        let mut state = NewsState::default();
        assert_eq!(state.category, "crypto");

        apply(&mut state, NewsAction::SetCategory("weather".to_string()));
        assert_eq!(state.category, "weather");
    }
}
