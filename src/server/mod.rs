// file: src/server/mod.rs
// description: http service exposing the ask endpoint and chat page
// reference: https://docs.rs/axum

pub mod handlers;
pub mod page;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::search::Ranker;
use crate::utils::Validator;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub ranker: Arc<Ranker>,
}

impl AppState {
    pub fn new(ranker: Arc<Ranker>) -> Self {
        Self { ranker }
    }
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/ask", post(handlers::ask))
        .route("/api/topics", get(handlers::topics))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    Validator::validate_port(config.port)?;

    let app = create_router(state, Duration::from_secs(config.request_timeout_secs));
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::builtin;
    use crate::models::{Answer, NOT_ENOUGH_INFORMATION};
    use crate::search::SearchSettings;
    use crate::text::Normalizer;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn app() -> Router {
        let ranker = Ranker::new(
            &builtin::new_york(),
            Normalizer::english(),
            SearchSettings::default(),
        );
        create_router(AppState::new(Arc::new(ranker)), Duration::from_secs(5))
    }

    fn ask_request(body: &str) -> Request<Body> {
        Request::post("/api/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ask_returns_answer() {
        let response = app()
            .oneshot(ask_request(r#"{"question":"eviction notice period"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let answer: Answer = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(answer.results[0].label, "Landlord/Tenant Law - Evictions");
        assert!(answer
            .answer
            .starts_with("Based on your question about eviction notice period"));
        assert!(answer.answer.contains("Source: New York State Real Property Law"));
    }

    #[tokio::test]
    async fn test_ask_echoes_trimmed_question() {
        let response = app()
            .oneshot(ask_request(r#"{"question":"  eviction notice period \n"}"#))
            .await
            .unwrap();

        let answer: Answer = serde_json::from_value(body_json(response).await).unwrap();
        assert!(answer
            .answer
            .starts_with("Based on your question about eviction notice period, "));
    }

    #[tokio::test]
    async fn test_ask_without_question_is_bad_request() {
        for body in [r#"{}"#, r#"{"question":""}"#, r#"{"question":"   "}"#] {
            let response = app().oneshot(ask_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await["error"], "No question provided");
        }
    }

    #[tokio::test]
    async fn test_ask_malformed_body_is_bad_request() {
        let response = app().oneshot(ask_request("not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ask_unmatched_question() {
        let response = app()
            .oneshot(ask_request(r#"{"question":"the"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["answer"], NOT_ENOUGH_INFORMATION);
        assert_eq!(json["results"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_topics() {
        let response = app()
            .oneshot(Request::get("/api/topics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["topics"].as_array().unwrap().len(), 14);
        assert_eq!(json["topics"][0], "General Procedure");
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Collections - Information Subpoena"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["checks"][0]["component"], "knowledge_base");
        assert_eq!(json["checks"][0]["detail"], "14 passages indexed");
        assert_eq!(json["checks"][1]["component"], "search");
    }
}
