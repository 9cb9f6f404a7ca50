use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SourceError;
use crate::upstream::{UpstreamClient, INTAKE_PATH};

use super::dto::{Badge, HealthProfile, RecommendedFood};
use super::fixtures;

/// One producer per dashboard resource. Fixture-backed and proxied
/// implementations share this capability, selected by configuration, so
/// consumers cannot tell where a response came from.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn health_profile(&self) -> Result<HealthProfile, SourceError>;

    /// Raw intake payload; the boundary relays it verbatim.
    async fn intake(&self) -> Result<Value, SourceError>;

    async fn recommendations(&self) -> Result<Vec<RecommendedFood>, SourceError>;

    async fn badges(&self) -> Result<Vec<Badge>, SourceError>;
}

/// Embedded sample data only.
pub struct FixtureSource;

#[async_trait]
impl DashboardSource for FixtureSource {
    async fn health_profile(&self) -> Result<HealthProfile, SourceError> {
        Ok(fixtures::health_profile())
    }

    async fn intake(&self) -> Result<Value, SourceError> {
        serde_json::to_value(fixtures::intake_snapshot())
            .map_err(|e| SourceError::LocalData(e.to_string()))
    }

    async fn recommendations(&self) -> Result<Vec<RecommendedFood>, SourceError> {
        Ok(fixtures::recommendations())
    }

    async fn badges(&self) -> Result<Vec<Badge>, SourceError> {
        Ok(fixtures::badges())
    }
}

/// Staged rollout: intake is proxied to the upstream backend, the
/// remaining resources still answer from fixtures.
pub struct BackendSource {
    upstream: Arc<dyn UpstreamClient>,
}

impl BackendSource {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl DashboardSource for BackendSource {
    async fn health_profile(&self) -> Result<HealthProfile, SourceError> {
        Ok(fixtures::health_profile())
    }

    async fn intake(&self) -> Result<Value, SourceError> {
        // Intake must not be served stale.
        self.upstream.get_json(INTAKE_PATH, true).await
    }

    async fn recommendations(&self) -> Result<Vec<RecommendedFood>, SourceError> {
        Ok(fixtures::recommendations())
    }

    async fn badges(&self) -> Result<Vec<Badge>, SourceError> {
        Ok(fixtures::badges())
    }
}
