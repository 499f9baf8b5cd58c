use async_trait::async_trait;
use library::http::{HttpClient, HttpRequest, HttpResponse};
use library::ports::CacheRepository;
use shared::{Error, Result};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Transport double that records every request and replays queued results
#[derive(Default)]
pub struct RecordingHttpClient {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
}

impl RecordingHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Result<HttpResponse>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for RecordingHttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Network("no response queued".to_string())))
    }
}

#[derive(Default)]
pub struct MapCache {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl CacheRepository for MapCache {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}
