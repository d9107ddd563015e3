//! Integration tests for the API Server


use serde_json::{json, Value};

use test_utils::TestApiServer;

fn applicant(fico: u16, dti: f64) -> Value {
    json!({
        "fico_score": fico,
        "debt_to_income_pct": dti,
        "log_annual_income": 10.5,
        "interest_rate_pct": 12.0,
    })
}

#[tokio::test]
async fn health_endpoint_reports_model_state() {
    let app = TestApiServer::with_model(0.1).await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "creditgate-evaluator");
    assert_eq!(body["model_loaded"], true);

    let degraded = TestApiServer::without_model().await;
    let body: Value = degraded.server.get("/health").await.json();
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn evaluate_approves_low_risk_applicant() {
    let app = TestApiServer::with_model(0.10).await;
    let response = app.server.post("/api/evaluate").json(&applicant(700, 15.0)).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["approved"], true);
    assert_eq!(body["verdict"], "approved");
    assert_eq!(body["source"], "MODEL");
    assert_eq!(body["risk_label"], "10.0%");
    assert!(body["evaluated_at"].as_str().is_some());
}

#[tokio::test]
async fn evaluate_rejects_on_model_risk() {
    let app = TestApiServer::with_model(0.31).await;
    let body: Value = app
        .server
        .post("/api/evaluate")
        .json(&applicant(700, 15.0))
        .await
        .json();

    assert_eq!(body["approved"], false);
    assert_eq!(body["reason"], "model_risk_detected");
    assert_eq!(body["source"], "MODEL");
}

#[tokio::test]
async fn evaluate_applies_hard_rules_before_model() {
    let app = TestApiServer::with_model(0.01).await;

    let body: Value = app
        .server
        .post("/api/evaluate")
        .json(&applicant(600, 15.0))
        .await
        .json();
    assert_eq!(body["reason"], "fico_below_minimum");
    assert_eq!(body["source"], "RULE_FICO");
    assert_eq!(body["risk_label"], "88.0%");

    let body: Value = app
        .server
        .post("/api/evaluate")
        .json(&applicant(700, 30.0))
        .await
        .json();
    assert_eq!(body["reason"], "dti_above_maximum");
    assert_eq!(body["source"], "RULE_DTI");

    assert_eq!(app.model.as_ref().map(|m| m.calls()), Some(0));
}

#[tokio::test]
async fn evaluate_without_model_is_service_unavailable() {
    let app = TestApiServer::without_model().await;
    let response = app.server.post("/api/evaluate").json(&applicant(700, 15.0)).await;
    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["error"], "model_unavailable");
    assert!(body.get("approved").is_none());
}

#[tokio::test]
async fn evaluate_without_model_still_reports_rule_rejections() {
    let app = TestApiServer::without_model().await;
    let response = app.server.post("/api/evaluate").json(&applicant(610, 15.0)).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["reason"], "fico_below_minimum");
}

#[tokio::test]
async fn evaluate_rejects_out_of_range_input() {
    let app = TestApiServer::with_model(0.1).await;
    let mut request = applicant(700, 15.0);
    request["interest_rate_pct"] = json!(40.0);

    let response = app.server.post("/api/evaluate").json(&request).await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["error"], "invalid_profile");
}

#[tokio::test]
async fn policy_endpoint_exposes_active_configuration() {
    let app = TestApiServer::with_model(0.1).await;
    let body: Value = app.server.get("/api/policy").await.json();

    assert_eq!(body["thresholds"]["min_fico"], 660);
    assert_eq!(body["thresholds"]["max_dti"], 22.0);
    assert_eq!(body["rule_risk"]["fico_reject"], 0.88);
    assert_eq!(body["decision"]["method"], "two_way");
    assert_eq!(body["decision"]["threshold"], 0.25);
}

#[tokio::test]
async fn model_endpoint_reports_load_error() {
    let app = TestApiServer::without_model().await;
    let body: Value = app.server.get("/api/model").await.json();
    assert_eq!(body["model_loaded"], false);
    assert_eq!(body["load_error"], "artifact not found");

    let app = TestApiServer::with_model(0.1).await;
    let body: Value = app.server.get("/api/model").await.json();
    assert_eq!(body["model_loaded"], true);
    assert_eq!(body["model_name"], "stub");
}

#[tokio::test]
async fn metrics_endpoint_tracks_requests_and_decisions() {
    let app = TestApiServer::with_model(0.1).await;
    let _ = app.server.post("/api/evaluate").json(&applicant(700, 15.0)).await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("credit_evaluations_total"));
    assert!(body.contains("credit_model_inference_seconds"));
}
