use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::state::AppState;
use crate::upstream::CHAT_PATH;

pub(crate) const CHAT_ERROR: &str = "챗봇 응답 생성 중 오류가 발생했습니다.";

/// Failure body for the chat turn operation.
#[derive(Debug, Serialize)]
pub struct ChatFailure {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat_turn))
        .route("/chat/session", get(session))
        .route("/chat/session/reset", post(reset_session))
}

/// Relays one chat turn to the upstream assistant. The payload, including
/// the caller-supplied session identifier, passes through unmodified; the
/// upstream owns all conversation state. No retries.
#[instrument(skip(state, payload))]
pub async fn chat_turn(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<ChatFailure>)> {
    match state.upstream.post_json(CHAT_PATH, &payload).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!(error = %e, "chat turn failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatFailure {
                    success: false,
                    error: CHAT_ERROR.into(),
                }),
            ))
        }
    }
}

#[instrument(skip(state))]
pub async fn session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        session_id: state.sessions.get_or_create(),
    })
}

#[instrument(skip(state))]
pub async fn reset_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session_id = state.sessions.reset();
    info!(%session_id, "chat session reset");
    Json(SessionResponse { session_id })
}
