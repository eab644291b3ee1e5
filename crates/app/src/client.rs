//! HTTP client for the till REST backend.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

/// Configuration for connecting to the REST backend.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Backend base address, e.g. `"http://localhost:3000"`.
    pub base_url: String,

    /// Bearer token attached to every request, if any.
    pub token: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// JSON client shared by every REST collaborator.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    http: Client,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// Absolute URL for an API path such as `/api/products`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx status or an unexpected body.
    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.request(Method::GET, path).query(query).send().await?;

        Ok(check(path, response).await?.json().await?)
    }

    /// Send `body` as JSON and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx status or an unexpected body.
    pub async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.request(method, path).json(body).send().await?;

        Ok(check(path, response).await?.json().await?)
    }

    /// Send `body` as JSON, ignoring whatever the backend replies with.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx status.
    pub async fn post_discarding<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;

        check(path, response).await?;

        Ok(())
    }

    /// `DELETE` a resource.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;

        check(path, response).await?;

        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);

        debug!(%method, %url, "api request");

        let request = self.http.request(method, url);

        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn check(path: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(path.to_string()));
    }

    let text = response.text().await.unwrap_or_default();

    Err(ApiError::UnexpectedResponse(format!(
        "{path} failed with status {status}: {text}"
    )))
}

/// Errors that can occur when talking to the REST backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend has no such resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend returned a non-2xx response.
    #[error("unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn client(base_url: &str) -> Result<ApiClient, ApiError> {
        ApiClient::new(ApiClientConfig {
            base_url: base_url.to_string(),
            token: None,
            timeout: Duration::from_secs(5),
        })
    }

    #[test]
    fn url_joins_base_and_path() -> TestResult {
        let client = client("http://localhost:3000")?;

        assert_eq!(client.url("/api/products"), "http://localhost:3000/api/products");

        Ok(())
    }

    #[test]
    fn url_ignores_trailing_slash_on_base() -> TestResult {
        let client = client("http://till.test/")?;

        assert_eq!(client.url("/api/orders/o-1"), "http://till.test/api/orders/o-1");

        Ok(())
    }
}
