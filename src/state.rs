use std::sync::Arc;

use crate::chat::session::{MemorySessionStore, SessionIdentity};
use crate::config::{AppConfig, SourceMode};
use crate::dashboard::source::{BackendSource, DashboardSource, FixtureSource};
use crate::upstream::{HttpUpstream, UpstreamClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub upstream: Arc<dyn UpstreamClient>,
    pub source: Arc<dyn DashboardSource>,
    pub sessions: SessionIdentity,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let upstream: Arc<dyn UpstreamClient> =
            Arc::new(HttpUpstream::new(&config.upstream_base_url));

        let source: Arc<dyn DashboardSource> = match config.source_mode {
            SourceMode::Backend => Arc::new(BackendSource::new(upstream.clone())),
            SourceMode::Fixture => Arc::new(FixtureSource),
        };

        let sessions = SessionIdentity::attach(Arc::new(MemorySessionStore::default()));

        Ok(Self {
            config,
            upstream,
            source,
            sessions,
        })
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        upstream: Arc<dyn UpstreamClient>,
        source: Arc<dyn DashboardSource>,
        sessions: SessionIdentity,
    ) -> Self {
        Self {
            config,
            upstream,
            source,
            sessions,
        }
    }

    /// State for tests: fixture data and an upstream that is always down.
    pub fn fake() -> Self {
        use crate::error::SourceError;
        use async_trait::async_trait;
        use serde_json::Value;

        struct DownUpstream;

        #[async_trait]
        impl UpstreamClient for DownUpstream {
            async fn get_json(&self, _path: &str, _no_store: bool) -> Result<Value, SourceError> {
                Err(SourceError::Unreachable("no upstream in tests".into()))
            }

            async fn post_json(&self, _path: &str, _body: &Value) -> Result<Value, SourceError> {
                Err(SourceError::Unreachable("no upstream in tests".into()))
            }
        }

        let config = Arc::new(AppConfig {
            upstream_base_url: "http://upstream.invalid".into(),
            source_mode: SourceMode::Fixture,
        });

        Self::from_parts(
            config,
            Arc::new(DownUpstream),
            Arc::new(FixtureSource),
            SessionIdentity::attach(Arc::new(MemorySessionStore::default())),
        )
    }

    /// Like `fake`, with the given upstream behind both the proxy and the
    /// backend-mode dashboard source.
    pub fn fake_with_upstream(upstream: Arc<dyn UpstreamClient>) -> Self {
        let base = Self::fake();
        Self::from_parts(
            base.config,
            upstream.clone(),
            Arc::new(BackendSource::new(upstream)),
            base.sessions,
        )
    }
}
