//! Transport layer under [`Portal`](crate::Portal).

use crate::error::ApiError;

/// A transport that issues one-shot requests against backend paths.
///
/// Implementations make exactly one attempt per call: no retries, no
/// caching, no deduplication of concurrent requests. Any non-success
/// status becomes [`ApiError::Status`] without further inspection.
pub trait Gateway {
    /// GET `path`, returning the response body.
    fn get(&self, path: &str) -> impl std::future::Future<Output = Result<String, ApiError>>;

    /// POST `path`, with an optional JSON body, returning the response body.
    fn post(
        &self,
        path: &str,
        body: Option<String>,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;

    /// DELETE `path`. Response bodies on deletes are discarded.
    fn delete(&self, path: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// Gateway that sends real HTTP requests with [`reqwest`].
///
/// On WASM this rides the browser's fetch API, so the same code path serves
/// web and desktop builds.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    base: String,
}

impl HttpGateway {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn read_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

impl Gateway for HttpGateway {
    async fn get(&self, path: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_body(response).await
    }

    async fn post(&self, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let mut request = self.client.post(self.url(path));
        if let Some(body) = body {
            request = request.header("content-type", "application/json").body(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_body(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
