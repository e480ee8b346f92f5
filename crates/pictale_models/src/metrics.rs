//! Metrics for pipeline stage calls.
//!
//! Records request counts, failures and latency for each hosted model call
//! through the OpenTelemetry global meter. Without an installed meter
//! provider every instrument is a no-op.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use pictale_error::{
    ModelServiceErrorKind, ModelUnavailableErrorKind, PictaleError, PictaleErrorKind,
    SpeechServiceErrorKind,
};
use std::sync::OnceLock;

static METRICS: OnceLock<StageMetrics> = OnceLock::new();

/// Metrics for hosted model calls, labeled by stage and model.
#[derive(Clone)]
pub struct StageMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful stage requests
    pub requests: Counter<u64>,
    /// Failed stage requests
    pub errors: Counter<u64>,
    /// Stage call duration in seconds
    pub duration: Histogram<f64>,
}

impl StageMetrics {
    fn init() -> Self {
        let meter = global::meter("pictale_models");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("pictale.stage.requests")
                .with_description("Successful model requests per stage")
                .build(),
            errors: meter
                .u64_counter("pictale.stage.errors")
                .with_description("Failed model requests per stage")
                .build(),
            duration: meter
                .f64_histogram("pictale.stage.duration")
                .with_unit("seconds")
                .with_description("Model call duration per stage")
                .build(),
        }
    }

    /// Get the global stage metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful model call.
    pub fn record_request(&self, stage: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("stage", stage.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed model call.
    pub fn record_error(&self, stage: &str, model: &str, error: &PictaleError) {
        let labels = &[
            KeyValue::new("stage", stage.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", classify_error(error)),
        ];
        self.errors.add(1, labels);
    }

    /// Record the outcome of a model call.
    pub fn record_outcome<T>(
        &self,
        stage: &str,
        model: &str,
        duration_secs: f64,
        result: &Result<T, PictaleError>,
    ) {
        match result {
            Ok(_) => self.record_request(stage, model, duration_secs),
            Err(e) => self.record_error(stage, model, e),
        }
    }
}

/// Classify an error for metrics labeling.
///
/// Returns one of: "auth", "timeout", "network", "invalid_input",
/// "invalid_response", "service", "internal"
pub fn classify_error(error: &PictaleError) -> &'static str {
    match error.kind() {
        PictaleErrorKind::Authentication(_) => "auth",
        PictaleErrorKind::Input(_) => "invalid_input",
        PictaleErrorKind::ModelUnavailable(e) => match e.kind {
            ModelUnavailableErrorKind::Timeout(_) => "timeout",
            ModelUnavailableErrorKind::Unreachable(_) => "network",
            ModelUnavailableErrorKind::InvalidResponse(_)
            | ModelUnavailableErrorKind::EmptyCaption => "invalid_response",
            ModelUnavailableErrorKind::Loading(_) | ModelUnavailableErrorKind::Api { .. } => {
                "service"
            }
        },
        PictaleErrorKind::ModelService(e) => match e.kind {
            ModelServiceErrorKind::Timeout(_) => "timeout",
            ModelServiceErrorKind::Http(_) => "network",
            ModelServiceErrorKind::ResponseParsing(_) | ModelServiceErrorKind::EmptyCompletion => {
                "invalid_response"
            }
            ModelServiceErrorKind::InvalidRequest(_) => "invalid_input",
            ModelServiceErrorKind::Api { .. } => "service",
        },
        PictaleErrorKind::SpeechService(e) => match e.kind {
            SpeechServiceErrorKind::Timeout(_) => "timeout",
            SpeechServiceErrorKind::Http(_) => "network",
            SpeechServiceErrorKind::NotAudio { .. } | SpeechServiceErrorKind::EmptyAudio => {
                "invalid_response"
            }
            SpeechServiceErrorKind::Api { .. } => "service",
        },
        PictaleErrorKind::Config(_) | PictaleErrorKind::Storage(_) => "internal",
    }
}
