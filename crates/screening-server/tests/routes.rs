use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use screening_export::render::Renderer;
use screening_export::styles::PageStyles;
use screening_instruments::Registry;
use screening_server::manifest::SlideManifest;
use screening_server::state::AppState;

fn test_app() -> Router {
    let mut slides = SlideManifest::new();
    slides.insert(
        "ADHD".to_string(),
        vec!["/about-conditions/ADHD/Slide1.PNG".to_string()],
    );
    let state = AppState::new(
        Registry::builtin().expect("built-ins validate"),
        Renderer::new(PageStyles::default()).expect("templates parse"),
        slides,
    );
    screening_server::app(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn selections(values: &[u32]) -> Value {
    let answers: Vec<Value> = values
        .iter()
        .enumerate()
        .map(|(question, value)| json!({ "question": question, "value": value }))
        .collect();
    json!({ "answers": answers })
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(test_app(), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn catalogue_lists_builtins() {
    let (status, body) = send(test_app(), get("/api/instruments")).await;
    assert_eq!(status, StatusCode::OK);

    let listed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        listed[0],
        json!({ "id": "cage-aid", "name": "CAGE-AID", "question_count": 4, "max_score": 4 })
    );
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn form_view_exposes_questions_and_domain() {
    let (status, body) = send(test_app(), get("/api/instruments/cage-aid")).await;
    assert_eq!(status, StatusCode::OK);

    let view: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(view["questions"].as_array().unwrap().len(), 4);
    assert_eq!(view["questions"][1]["number"], 2);
    assert_eq!(view["answer_domain"], json!([
        { "value": 1, "label": "Yes" },
        { "value": 0, "label": "No" }
    ]));
}

#[tokio::test]
async fn unknown_instrument_is_not_found() {
    let (status, body) = send(test_app(), get("/api/instruments/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("instrument not found: nope"));
}

#[tokio::test]
async fn complete_submission_returns_tier() {
    let request = post_json("/api/instruments/cage-aid/score", selections(&[1, 1, 0, 0]));
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::OK);

    let result: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(result["total_score"], 2);
    assert_eq!(result["tier"]["label"], "Positive screen for substance use disorder");
    assert_eq!(result["tier"]["severity"], "severe");
    assert_eq!(result["tier"]["actions"][0]["method"], "phone");
}

#[tokio::test]
async fn later_selection_replaces_earlier_one() {
    let body = json!({ "answers": [
        { "question": 0, "value": 1 },
        { "question": 0, "value": 0 },
        { "question": 1, "value": 1 },
        { "question": 2, "value": 0 },
        { "question": 3, "value": 0 }
    ]});
    let (status, body) = send(test_app(), post_json("/api/instruments/cage-aid/score", body)).await;
    assert_eq!(status, StatusCode::OK);

    let result: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(result["total_score"], 1);
    assert_eq!(result["tier"]["label"], "Some substance use concerns");
}

#[tokio::test]
async fn incomplete_submission_discloses_no_score() {
    let request = post_json("/api/instruments/cage-aid/score", selections(&[1, 1, 0]));
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["answered"], 3);
    assert_eq!(error["expected"], 4);
    assert!(error.get("total_score").is_none());
    assert!(error.get("tier").is_none());
}

#[tokio::test]
async fn invalid_selection_is_a_bad_request() {
    let body = json!({ "answers": [{ "question": 7, "value": 1 }] });
    let (status, body) = send(test_app(), post_json("/api/instruments/cage-aid/score", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("out of range"));
}

#[tokio::test]
async fn slides_manifest_is_served() {
    let (status, body) = send(test_app(), get("/api/slides")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "ADHD": ["/about-conditions/ADHD/Slide1.PNG"] })
    );
}

#[tokio::test]
async fn html_form_renders() {
    let (status, body) = send(test_app(), get("/screening/cage-aid")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<form method=\"post\">"));
    assert!(body.contains("name=\"q3\""));
}

#[tokio::test]
async fn html_submission_renders_result() {
    let request = post_form("/screening/cage-aid", "q0=0&q1=1&q2=0&q3=0");
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Total Score: 1/4"));
    assert!(body.contains("Assessment: Some substance use concerns"));
    assert!(body.contains("border-left: 4px solid #f59e0b"));
}

#[tokio::test]
async fn html_incomplete_submission_prompts_again() {
    let request = post_form("/screening/cage-aid", "q0=1&q2=0");
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Please answer all questions before seeing results."));
    assert!(body.contains("name=\"q0\" value=\"1\" checked"));
    assert!(!body.contains("Total Score"));
}

#[tokio::test]
async fn html_submission_with_garbage_value_is_rejected() {
    let request = post_form("/screening/cage-aid", "q0=maybe");
    let (status, _) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
