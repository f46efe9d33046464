//! Driven port for news searches by title.

use async_trait::async_trait;

use super::SourceError;

/// Raw article as returned by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsArticleRecord {
    /// Headline.
    pub title: Option<String>,
    /// Link to the article.
    pub url: Option<String>,
    /// Publisher name.
    pub source_name: Option<String>,
    /// Lead image URL.
    pub image_url: Option<String>,
}

/// Port for searching recent English-language articles by title.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Search articles whose titles mention `query`, newest first.
    async fn search_titles(&self, query: &str) -> Result<Vec<NewsArticleRecord>, SourceError>;
}

/// Fixture implementation echoing the query into two headlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureNewsSource;

#[async_trait]
impl NewsSource for FixtureNewsSource {
    async fn search_titles(&self, query: &str) -> Result<Vec<NewsArticleRecord>, SourceError> {
        Ok(vec![
            NewsArticleRecord {
                title: Some(format!("{query} announces rail expansion")),
                url: Some("https://news.example/rail".to_owned()),
                source_name: Some("Example Wire".to_owned()),
                image_url: None,
            },
            NewsArticleRecord {
                title: Some(format!("Markets rally across {query}")),
                url: Some("https://news.example/markets".to_owned()),
                source_name: Some("Example Daily".to_owned()),
                image_url: Some("https://news.example/markets.jpg".to_owned()),
            },
        ])
    }
}
