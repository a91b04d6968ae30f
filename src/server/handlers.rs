// file: src/server/handlers.rs
// description: http handlers for the ask endpoint, topics, page and health
// reference: https://docs.rs/axum

use super::AppState;
use super::page::render_index;
use crate::error::HelperError;
use crate::models::Answer;
use crate::search::SLOW_SEARCH;
use crate::utils::{HealthReport, HealthStatus, OperationTimer, Validator};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error, info, instrument};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

impl IntoResponse for HelperError {
    fn into_response(self) -> Response {
        let status = match &self {
            HelperError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Validation messages go to the client as-is
        let message = match &self {
            HelperError::Validation(msg) => {
                debug!(%msg, "Client error");
                msg.clone()
            }
            other => {
                error!(error = ?other, "Server error");
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.ranker.list_topic_titles()))
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<Answer>, HelperError> {
    let Json(request) = payload.map_err(|rejection| {
        HelperError::Validation(format!("Malformed request body: {}", rejection.body_text()))
    })?;

    let question = Validator::validate_question(request.question.as_deref())?;

    let timer = OperationTimer::start("ask");
    let results = state.ranker.search(question);
    timer.warn_if_slow(SLOW_SEARCH, question);
    timer.finish_with_count(results.len());

    info!("Answered question with {} result(s)", results.len());
    Ok(Json(Answer::compose(question, results)))
}

pub async fn topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: state.ranker.list_topic_titles().to_vec(),
    })
}

/// 503 when any component is unhealthy, 200 otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = state.ranker.health(SLOW_SEARCH);
    let status = match report.status {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };
    (status, Json(report))
}
