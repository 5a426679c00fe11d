//! Tracing subscriber setup.

use super::exporter::file_tracer_provider;
use crate::domain::error::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "storefront-search";
const TRACE_FILE: &str = "storefront-search-otlp.json";

/// Installs the global subscriber: an [`EnvFilter`] at `config.trace_level`
/// feeding an OpenTelemetry layer that exports to the trace file.
///
/// Returns the trace file path. Calling this more than once keeps the first
/// subscriber.
///
/// # Errors
///
/// Returns [`SearchError::Io`](crate::domain::SearchError::Io) if the data
/// directory cannot be created.
pub fn init_tracing(config: &Config) -> Result<PathBuf> {
    let data_dir = crate::infrastructure::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let trace_file = data_dir.join(TRACE_FILE);

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(trace_file.clone(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(&config.trace_level))
        .with(otel_layer)
        .try_init()
        .is_ok();

    tracing::debug!(installed, trace_file = %trace_file.display(), "tracing initialized");
    Ok(trace_file)
}
