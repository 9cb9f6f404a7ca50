use serde::Deserialize;

/// Compiled-in default for the upstream backend base address, used when
/// `UPSTREAM_BASE_URL` is not set.
pub const DEFAULT_UPSTREAM_BASE: &str = "http://localhost:8000";

/// Which producer answers the dashboard resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Intake proxied to the upstream backend, the rest from fixtures.
    Backend,
    /// Everything from embedded sample data.
    Fixture,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub upstream_base_url: String,
    pub source_mode: SourceMode,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let upstream_base_url =
            std::env::var("UPSTREAM_BASE_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.into());
        let source_mode = match std::env::var("DATA_SOURCE") {
            Ok(v) if v == "fixture" => SourceMode::Fixture,
            Ok(v) if v == "backend" => SourceMode::Backend,
            Ok(other) => anyhow::bail!("unknown DATA_SOURCE value: {other}"),
            Err(_) => SourceMode::Backend,
        };
        Ok(Self {
            upstream_base_url,
            source_mode,
        })
    }
}
