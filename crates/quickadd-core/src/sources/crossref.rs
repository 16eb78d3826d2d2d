//! Crossref source for DOI metadata
//!
//! API docs: https://api.crossref.org/swagger-ui/index.html
//! Polite pool: pass a `mailto` contact with each request.

use super::traits::{status_error, ArticleLookup, LookupError};
use crate::config::{CrossrefConfig, HttpConfig};
use crate::http::{HttpClient, HttpError};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CrossrefResponse {
    message: ArticleMetadata,
}

/// Work record as returned by `GET /works/{doi}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArticleMetadata {
    pub title: Option<Vec<String>>,
    #[serde(rename = "container-title")]
    pub container_title: Option<Vec<String>>,
    pub volume: Option<String>,
    pub page: Option<String>,
    pub published: Option<CrossrefDate>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(rename = "ISSN")]
    pub issn: Option<Vec<String>>,
    pub resource: Option<CrossrefResource>,
    pub author: Option<Vec<CrossrefAuthor>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrossrefAuthor {
    pub given: Option<String>,
    pub family: Option<String>,
    /// Organisational authors carry only a name
    pub name: Option<String>,
}

impl CrossrefAuthor {
    pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: Some(given.into()),
            family: Some(family.into()),
            name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrossrefDate {
    /// `[[year, month, day]]`; parts may be null or missing
    #[serde(rename = "date-parts")]
    pub date_parts: Option<Vec<Vec<Option<i32>>>>,
}

impl CrossrefDate {
    /// First element of the first date-part triple
    pub fn year(&self) -> Option<i32> {
        self.date_parts
            .as_ref()
            .and_then(|parts| parts.first())
            .and_then(|triple| triple.first().copied().flatten())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrossrefResource {
    pub primary: Option<CrossrefPrimaryResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrossrefPrimaryResource {
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

impl ArticleMetadata {
    /// The primary resource URL, if the work has one
    pub fn primary_url(&self) -> Option<&str> {
        self.resource
            .as_ref()
            .and_then(|r| r.primary.as_ref())
            .and_then(|p| p.url.as_deref())
    }
}

pub struct CrossrefClient {
    client: HttpClient,
    base_url: String,
    mailto: Option<String>,
}

impl CrossrefClient {
    pub fn new(config: &CrossrefConfig, http: &HttpConfig) -> Result<Self, HttpError> {
        Ok(Self {
            client: HttpClient::new(http)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            mailto: config.mailto.clone(),
        })
    }

    /// `{base}/works/{doi}` with the DOI kept segment for segment.
    ///
    /// Slashes stay as path separators; `?`, `#` and `%` inside a segment are
    /// percent-encoded so they cannot cut the DOI short.
    fn work_url(&self, doi: &str) -> Result<String, HttpError> {
        let invalid = || HttpError::InvalidUrl {
            url: self.base_url.clone(),
        };
        let mut url = url::Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push("works")
            .extend(doi.split('/'));
        Ok(url.into())
    }

    /// Parse single work response (for DOI lookup)
    pub fn parse_work_response(json: &str) -> Result<ArticleMetadata, LookupError> {
        let response: CrossrefResponse = serde_json::from_str(json)
            .map_err(|e| LookupError::malformed(format!("Invalid Crossref JSON: {}", e)))?;
        Ok(response.message)
    }
}

#[async_trait]
impl ArticleLookup for CrossrefClient {
    async fn lookup_by_doi(&self, doi: &str) -> Result<ArticleMetadata, LookupError> {
        let url = self.work_url(doi)?;

        tracing::debug!("Looking up DOI {} on Crossref", doi);
        let response = match &self.mailto {
            Some(mailto) => {
                self.client
                    .get_with_params(&url, &[("mailto", mailto.as_str())])
                    .await?
            }
            None => self.client.get(&url).await?,
        };
        if !response.is_success() {
            return Err(status_error(response.status));
        }

        Self::parse_work_response(&response.body)
    }
}
