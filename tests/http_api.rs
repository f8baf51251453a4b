//! HTTP surface driven through the router without a listener.

use std::sync::Arc;

use axum::{
  body::{to_bytes, Body},
  http::{Request, StatusCode},
  Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use career_backend::config::ServiceConfig;
use career_backend::routes::build_router;
use career_backend::state::AppState;

fn app_with(cfg: ServiceConfig) -> Router {
  build_router(Arc::new(AppState::from_config(cfg)))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
  let resp = app.clone().oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = to_bytes(resp.into_body(), 1 << 20).await.unwrap();
  let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
  (status, body)
}

fn get(uri: &str) -> Request<Body> {
  Request::get(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
  Request::post(uri)
    .header("content-type", "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

#[tokio::test]
async fn health_and_catalog() {
  let app = app_with(ServiceConfig::default());
  let (status, body) = send(&app, get("/api/v1/health")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "ok": true }));

  let (status, body) = send(&app, get("/api/v1/career/paths")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 5);

  let (_, body) = send(&app, get("/api/v1/career/questionnaire")).await;
  let ids: Vec<i64> = body.as_array().unwrap().iter().map(|q| q["id"].as_i64().unwrap()).collect();
  assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn recommendation_requires_quiz_data_then_assessment() {
  let app = app_with(ServiceConfig::default());

  let (status, body) = send(&app, get("/api/v1/career/recommend?userId=u1")).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert_eq!(body["code"], "no_quiz_data");

  let attempts = json!({ "userId": "u1", "attempts": [{ "category": "data", "isCorrect": true }] });
  let (status, body) = send(&app, post("/api/v1/attempts", attempts)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["recorded"], 1);

  let (status, body) = send(&app, get("/api/v1/career/recommend?userId=u1")).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert_eq!(body["code"], "assessment_incomplete");
}

#[tokio::test]
async fn full_flow_persists_resolved_choice() {
  let app = app_with(ServiceConfig::default());

  let attempts = json!({
    "userId": "u2",
    "attempts": [
      { "category": "frontend", "isCorrect": true },
      { "category": "frontend", "isCorrect": true },
      { "category": "backend", "isCorrect": true },
      { "category": null, "isCorrect": false },
      { "isCorrect": false }
    ]
  });
  send(&app, post("/api/v1/attempts", attempts)).await;

  let assessment = json!({
    "userId": "u2",
    "responses": [
      { "questionId": 1, "response": "4" },
      { "questionId": 2, "response": "Both equally" },
      { "questionId": 4, "response": "Building web applications" }
    ]
  });
  let (status, body) = send(&app, post("/api/v1/career/assessment", assessment)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["recorded"], 3);

  let (status, body) = send(&app, get("/api/v1/career/recommend?userId=u2")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["recommendedPathId"], "path-fullstack");
  assert_eq!(body["persisted"], true);
  assert_eq!(body["probabilities"].as_array().unwrap().len(), 5);
  assert_eq!(body["probabilities"][0]["pathKey"], "fullstack");
  assert_eq!(body["probabilities"][0]["resolved"], true);
  assert!(body["confidence"].as_f64().unwrap() > 20.0);
  assert_eq!(body["warnings"], json!([]));

  let (status, body) = send(&app, get("/api/v1/users/u2/career-path")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["pathId"], "path-fullstack");
}

#[tokio::test]
async fn unresolved_top_path_is_reported_but_not_persisted() {
  let cfg = ServiceConfig::from_toml_str(
    r#"
      [[catalog]]
      id = "m1"
      name = "Mobile App Developer"
    "#,
  )
  .unwrap();
  let app = app_with(cfg);

  let attempts = json!({ "userId": "u3", "attempts": [{ "category": "backend", "isCorrect": true }] });
  send(&app, post("/api/v1/attempts", attempts)).await;
  let assessment = json!({ "userId": "u3", "responses": [{ "questionId": 5, "response": "5" }] });
  send(&app, post("/api/v1/career/assessment", assessment)).await;

  let (status, body) = send(&app, get("/api/v1/career/recommend?userId=u3")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["recommendedPathId"], "fullstack");
  assert_eq!(body["persisted"], false);
  let warnings = body["warnings"].as_array().unwrap();
  assert_eq!(warnings.len(), 4);
  assert!(warnings.contains(&json!({ "kind": "unresolved_path", "pathKey": "fullstack" })));

  let (status, body) = send(&app, get("/api/v1/users/u3/career-path")).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn slug_resolution_survives_catalog_renames() {
  let cfg = ServiceConfig::from_toml_str(
    r#"
      [recommender]
      path_resolution = "slug"

      [[catalog]]
      id = "web-1"
      name = "Web Engineer"
      slug = "fullstack"
    "#,
  )
  .unwrap();
  let app = app_with(cfg);

  let attempts = json!({ "userId": "u4", "attempts": [{ "category": "frontend", "isCorrect": true }] });
  send(&app, post("/api/v1/attempts", attempts)).await;
  let assessment = json!({ "userId": "u4", "responses": [{ "questionId": 2, "response": "Both equally" }] });
  send(&app, post("/api/v1/career/assessment", assessment)).await;

  let (_, body) = send(&app, get("/api/v1/career/recommend?userId=u4")).await;
  assert_eq!(body["recommendedPathId"], "web-1");
  assert_eq!(body["persisted"], true);
}
