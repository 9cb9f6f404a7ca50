use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;
use tracing::{error, instrument};

use crate::state::AppState;

use super::aggregator;
use super::dto::{Badge, DashboardView, ErrorBody, HealthProfile, RecommendedFood};

const HEALTH_INFO_ERROR: &str = "건강 정보를 불러오는 중 오류가 발생했습니다.";
const INTAKE_ERROR: &str = "섭취 데이터를 불러오는 중 오류가 발생했습니다.";
const RECOMMENDATIONS_ERROR: &str = "추천 식단을 불러오는 중 오류가 발생했습니다.";
const BADGES_ERROR: &str = "업적 정보를 불러오는 중 오류가 발생했습니다.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health-info", get(health_info))
        .route("/intake-data", get(intake_data))
        .route("/recommendations", get(recommendations))
        .route("/badges", get(badges))
        .route("/dashboard", get(dashboard))
}

fn failure(message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

#[instrument(skip(state))]
pub async fn health_info(
    State(state): State<AppState>,
) -> Result<Json<HealthProfile>, (StatusCode, Json<ErrorBody>)> {
    state.source.health_profile().await.map(Json).map_err(|e| {
        error!(error = %e, "health info fetch failed");
        failure(HEALTH_INFO_ERROR)
    })
}

/// Relays the intake payload exactly as the source produced it.
#[instrument(skip(state))]
pub async fn intake_data(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorBody>)> {
    state.source.intake().await.map(Json).map_err(|e| {
        error!(error = %e, "intake fetch failed");
        failure(INTAKE_ERROR)
    })
}

#[instrument(skip(state))]
pub async fn recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecommendedFood>>, (StatusCode, Json<ErrorBody>)> {
    state.source.recommendations().await.map(Json).map_err(|e| {
        error!(error = %e, "recommendations fetch failed");
        failure(RECOMMENDATIONS_ERROR)
    })
}

#[instrument(skip(state))]
pub async fn badges(
    State(state): State<AppState>,
) -> Result<Json<Vec<Badge>>, (StatusCode, Json<ErrorBody>)> {
    match state.source.badges().await {
        Ok(mut list) => {
            super::badges::sort_for_display(&mut list);
            Ok(Json(list))
        }
        Err(e) => {
            error!(error = %e, "badges fetch failed");
            Err(failure(BADGES_ERROR))
        }
    }
}

#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    Json(aggregator::compose(state.source.as_ref()).await)
}
