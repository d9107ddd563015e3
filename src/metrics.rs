//! Prometheus metrics for the HTTP surface and the evaluator.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::error::EvaluationError;
use crate::models::{Decision, Verdict};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub evaluations_total: IntCounterVec,
    pub evaluation_errors_total: IntCounterVec,
    pub model_inference_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Number of HTTP requests currently being served",
        )?;
        let evaluations_total = IntCounterVec::new(
            Opts::new(
                "credit_evaluations_total",
                "Completed credit evaluations by decision source",
            ),
            &["source", "verdict"],
        )?;
        let evaluation_errors_total = IntCounterVec::new(
            Opts::new(
                "credit_evaluation_errors_total",
                "Evaluations that ended without a decision",
            ),
            &["kind"],
        )?;
        let model_inference_seconds = Histogram::with_opts(
            HistogramOpts::new("credit_model_inference_seconds", "Risk model inference latency")
                .buckets(vec![0.000_01, 0.000_1, 0.001, 0.01, 0.1]),
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(evaluations_total.clone()))?;
        registry.register(Box::new(evaluation_errors_total.clone()))?;
        registry.register(Box::new(model_inference_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            evaluations_total,
            evaluation_errors_total,
            model_inference_seconds,
        })
    }

    pub fn record_decision(&self, decision: &Decision) {
        let verdict = match decision.verdict {
            Verdict::Approved => "approved",
            Verdict::ManualReview => "manual_review",
            Verdict::Rejected => "rejected",
        };
        self.evaluations_total
            .with_label_values(&[decision.source.as_str(), verdict])
            .inc();
    }

    pub fn record_error(&self, error: &EvaluationError) {
        self.evaluation_errors_total
            .with_label_values(&[error.kind()])
            .inc();
    }

    pub fn observe_inference(&self, seconds: f64) {
        self.model_inference_seconds.observe(seconds);
    }

    /// Render all metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
