//! Native HTTP client using reqwest

use super::{HttpError, HttpResponse};
use crate::config::HttpConfig;
use reqwest::Client;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Build a client whose every request is bounded by the configured timeout
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| HttpError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let request = self.client.get(url);
        Self::send(request).await
    }

    pub async fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        let url =
            reqwest::Url::parse_with_params(url, params).map_err(|_| HttpError::InvalidUrl {
                url: url.to_string(),
            })?;

        self.get(url.as_str()).await
    }

    pub async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let mut request = self.client.post(url).json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        Self::send(request).await
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<HttpResponse, HttpError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::RequestFailed {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        tracing::debug!("HTTP {} from {}", status, response.url());

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Body {
                    message: e.to_string(),
                }
            }
        })?;

        Ok(HttpResponse { status, body })
    }
}
