use crate::NewsProvider;
use async_trait::async_trait;
use common::{models::NewsItem, Error, Result};
use serde::Deserialize;
use tracing::{debug, error};

pub const NEWSDATA_API_URL: &str = "https://newsdata.io/api/1/news";

/// How many headlines one fetch returns.
const PAGE_SIZE: u32 = 5;

pub struct NewsDataConnector {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsDataConnector {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    status: String,
    results: Option<Vec<RawArticle>>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    link: Option<String>,
    image_url: Option<String>,
    source_id: Option<String>,
    #[serde(default)]
    category: Vec<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

fn normalize_article(article: RawArticle) -> NewsItem {
    NewsItem {
        title: article.title.unwrap_or_default(),
        description: article.description,
        content: article.content,
        url: article.link.unwrap_or_default(),
        image_url: article.image_url,
        source_id: article.source_id.unwrap_or_default(),
        category: article.category,
        published_at: article.pub_date.unwrap_or_default(),
    }
}

/// The provider signals some failures inside a 200 response; anything
/// other than a success envelope with results is a provider error.
fn extract_articles(envelope: NewsEnvelope) -> Result<Vec<NewsItem>> {
    match envelope {
        NewsEnvelope {
            status,
            results: Some(results),
        } if status == "success" => Ok(results.into_iter().map(normalize_article).collect()),
        _ => Err(Error::Provider("Failed to fetch news".to_string())),
    }
}

#[async_trait]
impl NewsProvider for NewsDataConnector {
    async fn latest(&self, category: &str) -> Result<Vec<NewsItem>> {
        debug!("Fetching news for category {}", category);

        let size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("q", category),
                ("language", "en"),
                ("size", size.as_str()),
            ])
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("News API error: {} - {}", status, error_text);
            return Err(Error::Provider(format!("API error: {}", status.as_u16())));
        }

        let envelope: NewsEnvelope = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("failed to parse news response: {}", e)))?;

        extract_articles(envelope)
    }
}
