use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;

#[derive(Debug, Error)]
pub enum ApiConnectionError {
    /// Host unreachable, connection reset or timed out.
    #[error("Network error: {0}")]
    NetworkFailure(#[source] reqwest::Error),
    #[error("API error {status}: {error_body}")]
    BadStatus {
        status: StatusCode,
        error_body: String,
    },
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Cannot build request URL from base '{0}'")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkFailure(err)
    }
}

impl ApiConnectionError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiConnectionError::NetworkFailure(_) => "network_failure",
            ApiConnectionError::BadStatus { .. } => "bad_status",
            ApiConnectionError::MalformedResponse(_) => "malformed_response",
            ApiConnectionError::NotFound(_) => "not_found",
            ApiConnectionError::InvalidUrl(_) => "invalid_url",
        }
    }
}

/// Thin JSON-over-HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiConnectionError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiConnectionError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiConnectionError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiConnectionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        debug!(%url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn get_json<T>(&self, segments: &[&str]) -> Result<T, ApiConnectionError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiConnectionError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiConnectionError::NotFound(response.url().path().to_string()));
        }
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ApiConnectionError::BadStatus { status, error_body });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
