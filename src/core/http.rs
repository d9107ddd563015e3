//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::Config;
use crate::engine::CreditEvaluator;
use crate::error::EvaluationError;
use crate::metrics::Metrics;
use crate::models::{ApplicantProfile, Decision, DecisionSource, Verdict};
use crate::risk;

pub const SERVICE_NAME: &str = "creditgate-evaluator";

#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<CreditEvaluator>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME,
        "model_loaded": state.evaluator.model_status().model_loaded,
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    // Track in-flight requests
    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();

    // Record metrics
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    // Log if error status
    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Evaluation request as collected by the input widgets.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub fico_score: u16,
    pub debt_to_income_pct: f64,
    pub log_annual_income: f64,
    /// Percent, 5-25.
    pub interest_rate_pct: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub approved: bool,
    pub verdict: Verdict,
    pub reason: String,
    pub risk_probability: f64,
    pub risk_percent: f64,
    pub risk_label: String,
    pub source: DecisionSource,
    /// Response time, not part of the decision itself.
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Decision> for DecisionResponse {
    fn from(decision: Decision) -> Self {
        Self {
            approved: decision.approved,
            verdict: decision.verdict,
            risk_percent: decision.risk_percent(),
            risk_label: decision.risk_label(),
            reason: decision.reason,
            risk_probability: decision.risk_probability,
            source: decision.source,
            evaluated_at: chrono::Utc::now(),
        }
    }
}

/// Error body for evaluations that produced no decision.
pub struct ApiError(EvaluationError);

impl From<EvaluationError> for ApiError {
    fn from(e: EvaluationError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            EvaluationError::InvalidProfile { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            EvaluationError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            EvaluationError::SchemaMismatch { .. } | EvaluationError::Prediction(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(json!({
            "error": self.0.kind(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Evaluate one applicant
async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<DecisionResponse>, ApiError> {
    let profile = ApplicantProfile::from_percent_rate(
        request.fico_score,
        request.debt_to_income_pct,
        request.log_annual_income,
        request.interest_rate_pct,
    )?;

    // No body on failure: a model-path error never renders a decision
    let decision = state.evaluator.evaluate(&profile)?;
    Ok(Json(decision.into()))
}

/// Active thresholds and decision policy
async fn policy(State(state): State<AppState>) -> Json<Value> {
    let gate = state.evaluator.gate();
    Json(json!({
        "thresholds": gate.thresholds(),
        "rule_risk": gate.risk_scores(),
        "decision": state.evaluator.decision_policy(),
    }))
}

async fn model_status(State(state): State<AppState>) -> Json<risk::ModelStatus> {
    Json(state.evaluator.model_status())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/evaluate", post(evaluate))
        .route("/api/policy", get(policy))
        .route("/api/model", get(model_status))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    // Missing or broken artifacts leave the service up; only rule
    // rejections can be decided until the model is fixed.
    let adapter = risk::load_or_degrade(&config.model_path, &config.schema_path);
    let evaluator = CreditEvaluator::new(config.policy, adapter).with_metrics(metrics.clone());

    let state = AppState {
        evaluator: Arc::new(evaluator),
        metrics,
        start_time: Arc::new(Instant::now()),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
