//! Application router assembly.
//!
//! [`router`] mounts every endpoint; [`build_app`] wraps it in the
//! transport layers configured for the running server.

use axum::body::Body;
use axum::routing::get;
use axum::{Json, Router};
use http::{header, HeaderName, HeaderValue, Method, Request};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::notes::{note_routes, HealthResponse, NoteAppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// All routes, without middleware.
pub fn router(state: NoteAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(note_routes())
        .with_state(state)
}

/// The full application: routes plus tracing, request ids, timeout,
/// CORS and compression.
pub fn build_app(state: NoteAppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router(state)
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// GET /health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let configured = config.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if configured.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = configured
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryNoteStore;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> NoteAppState {
        NoteAppState::new(Arc::new(InMemoryNoteStore::new()))
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = router(state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn build_app_assigns_request_id() {
        let app = build_app(state(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/notes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn build_app_keeps_client_request_id() {
        let app = build_app(state(), &ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let response = router(state())
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn cors_layer_skips_invalid_origins() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173,bad\norigin".to_string()),
            ..Default::default()
        };
        let _layer = cors_layer(&config);
    }

    #[tokio::test]
    async fn wildcard_origin_allows_any_origin() {
        let config = ServerConfig {
            cors_origins: Some("*".to_string()),
            ..Default::default()
        };
        let app = build_app(state(), &config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
