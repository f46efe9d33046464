//! DTOs for decoding article search responses.

use serde::Deserialize;

use crate::domain::ports::{NewsArticleRecord, SourceError};

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    status: Option<String>,
    code: Option<String>,
    message: Option<String>,
    articles: Option<Vec<ArticleDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleDto {
    title: Option<String>,
    url: Option<String>,
    source: Option<ArticleSourceDto>,
    url_to_image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleSourceDto {
    name: Option<String>,
}

impl SearchResponseDto {
    /// Convert to domain records; an in-band `"status": "error"` is a failure.
    pub(super) fn into_domain(self) -> Result<Vec<NewsArticleRecord>, SourceError> {
        if self.status.as_deref() == Some("error") {
            let code = self.code.as_deref().unwrap_or("unknown");
            let message = self.message.as_deref().unwrap_or_default();
            return Err(SourceError::decode(format!(
                "news service reported an error ({code}) {message}"
            )));
        }
        Ok(self
            .articles
            .unwrap_or_default()
            .into_iter()
            .map(ArticleDto::into_domain)
            .collect())
    }
}

impl ArticleDto {
    fn into_domain(self) -> NewsArticleRecord {
        NewsArticleRecord {
            title: self.title,
            url: self.url,
            source_name: self.source.and_then(|source| source.name),
            image_url: self.url_to_image,
        }
    }
}
