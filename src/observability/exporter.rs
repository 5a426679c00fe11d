//! File-backed OpenTelemetry span exporter.
//!
//! Spans never go to stdout (the terminal UI owns it). Each batch handed over
//! by the SDK is encoded by [`OtlpFormatter`] and appended as one line to a
//! [`RotatingFile`].

use super::file_writer::RotatingFile;
use super::span_formatter::OtlpFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;

#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    formatter: OtlpFormatter,
    shut_down: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.shut_down {
            Err(TraceError::from("file exporter is shut down"))
        } else {
            let line = self.formatter.format_batch(&batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn set_resource(&mut self, _resource: &Resource) {}
}

/// Builds a tracer provider that exports every span to `path` as it ends.
pub fn file_tracer_provider(path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(path),
        formatter: OtlpFormatter::new(resource.clone(), scope),
        shut_down: false,
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
