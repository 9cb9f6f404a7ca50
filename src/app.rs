use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, instrument};

use crate::dashboard::dto::ErrorBody;
use crate::state::AppState;
use crate::{chat, dashboard};

const RELAY_ERROR: &str = "요청을 처리하는 중 오류가 발생했습니다.";

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest(
            "/api",
            Router::new()
                .merge(dashboard::router())
                .merge(chat::router())
                .fallback(relay_unmatched),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

/// Rewrite rule: any `/api/*` path without a dedicated handler is
/// forwarded to the upstream host, path and query preserved.
#[instrument(skip(state, body))]
async fn relay_unmatched(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<ErrorBody>)> {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let relayed = match method {
        Method::GET => state.upstream.get_json(&path, false).await,
        Method::POST => {
            let payload: Value = serde_json::from_slice(&body).map_err(|e| {
                error!(error = %e, %path, "relay body is not json");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: RELAY_ERROR.into(),
                    }),
                )
            })?;
            state.upstream.post_json(&path, &payload).await
        }
        _ => {
            return Err((
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorBody {
                    error: RELAY_ERROR.into(),
                }),
            ))
        }
    };

    relayed.map(Json).map_err(|e| {
        error!(error = %e, %path, "relay to upstream failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: RELAY_ERROR.into(),
            }),
        )
    })
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::upstream::UpstreamClient;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, Response};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct RecordingUpstream {
        reply: Value,
        seen: Mutex<Vec<String>>,
    }

    impl RecordingUpstream {
        fn new(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl UpstreamClient for RecordingUpstream {
        async fn get_json(&self, path: &str, _no_store: bool) -> Result<Value, SourceError> {
            self.seen.lock().unwrap().push(format!("GET {path}"));
            Ok(self.reply.clone())
        }

        async fn post_json(&self, path: &str, _body: &Value) -> Result<Value, SourceError> {
            self.seen.lock().unwrap().push(format!("POST {path}"));
            Ok(self.reply.clone())
        }
    }

    async fn body_json(res: Response<Body>) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn recommendations_returns_three_fixture_items() {
        let app = build_app(AppState::fake());
        let res = app.oneshot(get("/api/recommendations")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        let items = json.as_array().expect("array body");
        assert_eq!(items.len(), 3);
        let ids: Vec<u64> = items.iter().map(|i| i["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        for item in items {
            assert!(item["calories"].as_f64().expect("calories present") > 0.0);
        }
    }

    #[tokio::test]
    async fn chat_with_unreachable_upstream_returns_the_fixed_failure() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(post_json(
                "/api/chat",
                &json!({"message": "안녕", "session_id": "abc"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(res).await,
            json!({"success": false, "error": "챗봇 응답 생성 중 오류가 발생했습니다."})
        );
    }

    #[tokio::test]
    async fn chat_relays_the_upstream_body_verbatim() {
        let reply = json!({"success": true, "response": "좋아요!", "extra": {"k": 1}});
        let upstream = RecordingUpstream::new(reply.clone());
        let app = build_app(AppState::fake_with_upstream(upstream.clone()));

        let res = app
            .oneshot(post_json("/api/chat", &json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, reply);
        assert_eq!(
            *upstream.seen.lock().unwrap(),
            ["POST /api/v1/chat_v2"]
        );
    }

    #[tokio::test]
    async fn intake_data_is_proxied_and_relayed_verbatim() {
        let reply = json!({"totalCalories": 1200, "targetCalories": 1800, "vendorField": "kept"});
        let upstream = RecordingUpstream::new(reply.clone());
        let app = build_app(AppState::fake_with_upstream(upstream.clone()));

        let res = app.oneshot(get("/api/intake-data")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, reply);
        assert_eq!(
            *upstream.seen.lock().unwrap(),
            ["GET /api/v1/user/intake-data"]
        );
    }

    #[tokio::test]
    async fn intake_failure_hides_the_underlying_error() {
        let down = AppState::fake().upstream;
        let app = build_app(AppState::fake_with_upstream(down));
        let res = app.oneshot(get("/api/intake-data")).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(body["error"], "섭취 데이터를 불러오는 중 오류가 발생했습니다.");
        assert!(!body["error"].as_str().unwrap().contains("upstream"));
    }

    #[tokio::test]
    async fn health_info_answers_from_the_fixture() {
        let app = build_app(AppState::fake());
        let res = app.oneshot(get("/api/health-info")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert!(json["recommendedCalories"].as_f64().unwrap() >= 0.0);
        assert!(json["goal"].is_string());
    }

    #[tokio::test]
    async fn badges_come_back_ordered_for_display() {
        let app = build_app(AppState::fake());
        let res = app.oneshot(get("/api/badges")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        let statuses: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["status"].as_str().unwrap())
            .collect();
        assert_eq!(statuses, vec!["achieved", "achieved", "pending", "locked"]);
    }

    #[tokio::test]
    async fn dashboard_degrades_the_proxied_fragment_independently() {
        // Backend-mode source with a dead upstream: intake is the only
        // fragment that fails.
        let down = AppState::fake().upstream;
        let app = build_app(AppState::fake_with_upstream(down));

        let res = app.oneshot(get("/api/dashboard")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert!(json["intake"].is_null());
        assert!(json["health"].is_object());
        assert!(json["recommendations"].is_array());
        assert!(json["badges"].is_array());
    }

    #[tokio::test]
    async fn session_is_stable_across_requests_and_changes_on_reset() {
        let app = build_app(AppState::fake());

        let first = body_json(app.clone().oneshot(get("/api/chat/session")).await.unwrap()).await;
        let again = body_json(app.clone().oneshot(get("/api/chat/session")).await.unwrap()).await;
        assert_eq!(first["sessionId"], again["sessionId"]);

        let reset = body_json(
            app.clone()
                .oneshot(post_json("/api/chat/session/reset", &json!({})))
                .await
                .unwrap(),
        )
        .await;
        assert_ne!(reset["sessionId"], first["sessionId"]);

        let after = body_json(app.oneshot(get("/api/chat/session")).await.unwrap()).await;
        assert_eq!(after["sessionId"], reset["sessionId"]);
    }

    #[tokio::test]
    async fn unmatched_api_paths_forward_to_the_upstream() {
        let reply = json!({"pong": true});
        let upstream = RecordingUpstream::new(reply.clone());
        let app = build_app(AppState::fake_with_upstream(upstream.clone()));

        let res = app.oneshot(get("/api/v1/ping?probe=1")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, reply);
        assert_eq!(
            *upstream.seen.lock().unwrap(),
            ["GET /api/v1/ping?probe=1"]
        );
    }

    #[tokio::test]
    async fn unmatched_relay_translates_failure_to_the_generic_message() {
        let app = build_app(AppState::fake());
        let res = app.oneshot(get("/api/v1/ping")).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(res).await,
            json!({"error": "요청을 처리하는 중 오류가 발생했습니다."})
        );
    }
}
