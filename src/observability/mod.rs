//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces go to `<data_dir>/storefront-search-otlp.json`
//! - Files rotate at 10 MB, keeping 3 timestamped backups
//! - Level comes from `trace_level` in the configuration (default `info`),
//!   using `EnvFilter` directive syntax, e.g. `storefront_search=debug`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and tracer provider
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Rotating line writer

mod exporter;
mod file_writer;
mod init;
mod span_formatter;

pub use init::init_tracing;
