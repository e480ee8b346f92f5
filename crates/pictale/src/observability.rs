//! Logging and telemetry setup.
//!
//! Always installs a `tracing` subscriber with an `EnvFilter` and a text or
//! JSON formatter. With the `observability` feature, spans are additionally
//! bridged to OpenTelemetry and exported to stdout together with the stage
//! metrics.

use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How the `pictale` binary reports what it is doing.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// `service.name` resource attribute
    pub service_name: String,
    /// `service.version` resource attribute
    pub service_version: String,
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// One JSON object per event instead of text lines
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Text logs at `RUST_LOG` or `info`.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: false,
        }
    }

    /// Override the filter directive.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switch between JSON and text output.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns error if the filter is invalid or a global subscriber is already
/// installed.
pub fn init_observability(config: ObservabilityConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    let subscriber = tracing_subscriber::registry().with(env_filter).with(fmt_layer);

    #[cfg(feature = "observability")]
    {
        let providers = otel::Providers::build(&config);
        subscriber.with(providers.layer(&config)).try_init()?;
        providers.install();
    }

    #[cfg(not(feature = "observability"))]
    subscriber.try_init()?;

    Ok(())
}

/// Flush and shut down exporters.
pub fn shutdown_observability() {
    #[cfg(feature = "observability")]
    otel::shutdown();
}

#[cfg(feature = "observability")]
mod otel {
    use super::ObservabilityConfig;
    use opentelemetry::{KeyValue, global, trace::TracerProvider};
    use opentelemetry_sdk::{
        Resource,
        metrics::{PeriodicReader, SdkMeterProvider},
        trace::{SdkTracer, SdkTracerProvider},
    };
    use std::sync::OnceLock;
    use tracing_opentelemetry::OpenTelemetryLayer;

    static PROVIDERS: OnceLock<(SdkTracerProvider, SdkMeterProvider)> = OnceLock::new();

    /// Stdout span and metric exporters for one process.
    pub(super) struct Providers {
        tracer: SdkTracerProvider,
        meter: SdkMeterProvider,
    }

    impl Providers {
        pub(super) fn build(config: &ObservabilityConfig) -> Self {
            let resource = Resource::builder()
                .with_service_name(config.service_name.clone())
                .with_attributes(vec![KeyValue::new(
                    "service.version",
                    config.service_version.clone(),
                )])
                .build();

            let tracer = SdkTracerProvider::builder()
                .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
                .with_resource(resource.clone())
                .build();

            let reader =
                PeriodicReader::builder(opentelemetry_stdout::MetricExporter::default()).build();
            let meter = SdkMeterProvider::builder()
                .with_reader(reader)
                .with_resource(resource)
                .build();

            Self { tracer, meter }
        }

        /// Bridge layer feeding `tracing` spans to the span exporter.
        pub(super) fn layer<S>(&self, config: &ObservabilityConfig) -> OpenTelemetryLayer<S, SdkTracer>
        where
            S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
        {
            tracing_opentelemetry::layer().with_tracer(self.tracer.tracer(config.service_name.clone()))
        }

        /// Register as the global providers. Only call once the subscriber
        /// carrying [`Providers::layer`] is installed.
        pub(super) fn install(self) {
            if PROVIDERS.get().is_some() {
                tracing::warn!("Telemetry providers already installed, keeping the existing ones");
                return;
            }
            global::set_tracer_provider(self.tracer.clone());
            global::set_meter_provider(self.meter.clone());
            if PROVIDERS.set((self.tracer, self.meter)).is_err() {
                tracing::warn!("Telemetry providers were installed concurrently");
            }
        }
    }

    #[cfg(test)]
    pub(super) fn installed() -> bool {
        PROVIDERS.get().is_some()
    }

    pub(super) fn shutdown() {
        if let Some((tracer_provider, meter_provider)) = PROVIDERS.get() {
            if let Err(e) = tracer_provider.shutdown() {
                tracing::warn!(error = %e, "Failed to shut down tracer provider");
            }
            if let Err(e) = meter_provider.shutdown() {
                tracing::warn!(error = %e, "Failed to shut down meter provider");
            }
        }
    }
}
