//! HTTP endpoint handlers. These are thin wrappers that forward to the recommender and store.
//! Each handler is instrumented and logs ids and basic result info.

use std::sync::Arc;
use axum::{
  extract::{Path, Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{error, info, instrument};

use crate::error::RecommendError;
use crate::protocol::*;
use crate::seeds::questionnaire;
use crate::state::AppState;
use crate::store::CareerStore;

/// HTTP mapping for recommendation failures.
pub struct ApiError(pub RecommendError);

impl From<RecommendError> for ApiError {
  fn from(e: RecommendError) -> Self { ApiError(e) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, code, message) = match &self.0 {
      RecommendError::NoQuizData =>
        (StatusCode::UNPROCESSABLE_ENTITY, "no_quiz_data", "Take some quizzes first".to_string()),
      RecommendError::AssessmentIncomplete =>
        (StatusCode::UNPROCESSABLE_ENTITY, "assessment_incomplete", "Complete the interest assessment first".to_string()),
      RecommendError::Storage(e) => {
        error!(target: "career_backend", error = %e, "Storage failure during recommendation");
        (StatusCode::INTERNAL_SERVER_ERROR, "storage", e.to_string())
      }
    };
    (status, Json(ErrorOut { code, message })).into_response()
  }
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_paths(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
  let catalog = state.store.fetch_career_path_catalog().await.map_err(RecommendError::from)?;
  Ok(Json(catalog))
}

#[instrument(level = "info")]
pub async fn http_get_questionnaire() -> impl IntoResponse { Json(questionnaire()) }

#[instrument(level = "info", skip(state, body), fields(user_id = %body.user_id, count = body.attempts.len()))]
pub async fn http_post_attempts(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AttemptsIn>,
) -> impl IntoResponse {
  let count = body.attempts.len();
  let total = state.store.record_attempts(&body.user_id, body.attempts).await;
  info!(target: "career_backend", user_id = %body.user_id, count, total, "HTTP attempts recorded");
  Json(RecordedOut { recorded: count })
}

#[instrument(level = "info", skip(state, body), fields(user_id = %body.user_id, count = body.responses.len()))]
pub async fn http_post_assessment(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AssessmentIn>,
) -> impl IntoResponse {
  let recorded = state.store.submit_assessment(&body.user_id, body.responses).await;
  info!(target: "career_backend", user_id = %body.user_id, recorded, "HTTP assessment submitted");
  Json(RecordedOut { recorded })
}

#[instrument(level = "info", skip(state), fields(user_id = %q.user_id))]
pub async fn http_get_recommend(
  State(state): State<Arc<AppState>>,
  Query(q): Query<RecommendQuery>,
) -> Result<impl IntoResponse, ApiError> {
  let rec = state.recommender.recommend(&q.user_id).await?;
  let persisted = state.persist_choice(&q.user_id, &rec).await;
  info!(target: "career_backend", user_id = %q.user_id, path = %rec.recommended_path_id.as_str(), persisted, "HTTP recommendation served");
  Ok(Json(to_out(&rec, persisted)))
}

#[instrument(level = "info", skip(state), fields(%user_id))]
pub async fn http_get_chosen_path(
  State(state): State<Arc<AppState>>,
  Path(user_id): Path<String>,
) -> Response {
  match state.chosen_path(&user_id).await {
    Some(choice) => Json(ChosenPathOut { user_id, path_id: choice.path_id, confidence: choice.confidence }).into_response(),
    None => (
      StatusCode::NOT_FOUND,
      Json(ErrorOut { code: "not_found", message: format!("No career path chosen for {}", user_id) }),
    )
      .into_response(),
  }
}
