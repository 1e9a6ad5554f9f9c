use serde::{Deserialize, Serialize};

/// One headline, normalized from the news provider's article shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    pub source_id: String,
    /// Category tags attached by the provider.
    pub category: Vec<String>,
    /// Publication time as the provider formats it.
    pub published_at: String,
}
