use async_trait::async_trait;
use library::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use library::ports::CacheRepository;
use library::usecases::ACCESS_TOKEN_KEY;
use reqwest::{Client, Method};
use serde_json::Value;
use shared::{Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Header carrying the current access token on authorized requests
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Transport Client over reqwest. JSON in, JSON out; anything outside 2xx is
/// an error carrying the status and the raw body text.
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", request.method, request.url, e);
            Error::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(
                "{} {} returned status {}",
                request.method, request.url, status
            );
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        // Plain-text bodies are kept as a JSON string; typed endpoints then
        // fail to decode them, unit endpoints ignore them
        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
        };

        Ok(HttpResponse::new(status.as_u16(), body))
    }
}

/// Decorator that attaches the stored access token to every request
pub struct AuthorizedHttpClient {
    inner: Arc<dyn HttpClient>,
    cache: Arc<dyn CacheRepository>,
}

impl AuthorizedHttpClient {
    pub fn new(inner: Arc<dyn HttpClient>, cache: Arc<dyn CacheRepository>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl HttpClient for AuthorizedHttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        let request = match self.cache.get(ACCESS_TOKEN_KEY).await? {
            Some(token) if !token.is_empty() => request.with_header(ACCESS_TOKEN_HEADER, token),
            _ => request,
        };
        self.inner.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MapCache, RecordingHttpClient};

    #[tokio::test]
    async fn test_authorized_client_adds_token_header() {
        let inner = Arc::new(RecordingHttpClient::new());
        inner.push_response(Ok(HttpResponse::new(200, None)));
        let cache = Arc::new(MapCache::default());
        cache.set(ACCESS_TOKEN_KEY, "at1").await.unwrap();

        let client = AuthorizedHttpClient::new(inner.clone(), cache);
        client
            .request(HttpRequest::get("http://localhost:3333/users"))
            .await
            .unwrap();

        let requests = inner.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header(ACCESS_TOKEN_HEADER), Some("at1"));
    }

    #[tokio::test]
    async fn test_authorized_client_without_token_leaves_request_alone() {
        let inner = Arc::new(RecordingHttpClient::new());
        inner.push_response(Ok(HttpResponse::new(200, None)));
        let cache = Arc::new(MapCache::default());
        // A cleared account leaves an empty token behind
        cache.set(ACCESS_TOKEN_KEY, "").await.unwrap();

        let client = AuthorizedHttpClient::new(inner.clone(), cache);
        let request = HttpRequest::get("http://localhost:3333/users");
        client.request(request.clone()).await.unwrap();

        assert_eq!(inner.requests(), vec![request]);
    }

    #[tokio::test]
    async fn test_authorized_client_passes_errors_through() {
        let inner = Arc::new(RecordingHttpClient::new());
        inner.push_response(Err(Error::Status {
            status: 403,
            body: "forbidden".to_string(),
        }));
        let client = AuthorizedHttpClient::new(inner, Arc::new(MapCache::default()));

        let result = client
            .request(HttpRequest::get("http://localhost:3333/users"))
            .await;

        assert_eq!(
            result,
            Err(Error::Status {
                status: 403,
                body: "forbidden".to_string()
            })
        );
    }
}
