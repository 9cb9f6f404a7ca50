use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::debug;

use crate::error::SourceError;

/// Upstream path for one chat turn.
pub const CHAT_PATH: &str = "/api/v1/chat_v2";
/// Upstream path for the current intake snapshot.
pub const INTAKE_PATH: &str = "/api/v1/user/intake-data";

/// JSON transport to the upstream backend.
///
/// Success is the parsed JSON exactly as the upstream produced it; bodies
/// are never reshaped here. A non-2xx status is a failure and its body is
/// not parsed as success data.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// GET `path`. `no_store` disables intermediate response caching for
    /// reads that must not be stale.
    async fn get_json(&self, path: &str, no_store: bool) -> Result<Value, SourceError>;

    /// POST `path` with a JSON body.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, SourceError>;
}

pub struct HttpUpstream {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUpstream {
    // No request timeout: a hanging upstream call hangs the boundary
    // operation with it.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn read_json(resp: reqwest::Response) -> Result<Value, SourceError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Rejected(status.as_u16()));
        }
        resp.json::<Value>()
            .await
            .map_err(|e| SourceError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn get_json(&self, path: &str, no_store: bool) -> Result<Value, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "upstream GET");
        let mut req = self.client.get(&url);
        if no_store {
            req = req.header(header::CACHE_CONTROL, "no-store");
        }
        let resp = req
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;
        Self::read_json(resp).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "upstream POST");
        let resp = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;
        Self::read_json(resp).await
    }
}
