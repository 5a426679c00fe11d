//! OTLP JSON encoding of finished spans.
//!
//! Each exported batch becomes one JSON document in the OTLP/JSON trace
//! shape (`resourceSpans` → `scopeSpans` → `spans`), written as one line.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Encodes span batches under a fixed resource and instrumentation scope.
pub struct OtlpFormatter {
    resource: Resource,
    scope: &'static str,
}

impl OtlpFormatter {
    pub const fn new(resource: Resource, scope: &'static str) -> Self {
        Self { resource, scope }
    }

    /// Encodes `batch` as a complete OTLP document.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": batch.iter().map(format_span).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

impl std::fmt::Debug for OtlpFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFormatter")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

/// OTLP `SpanKind` enum values.
const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs
        .iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    let value = match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        // OTLP/JSON encodes 64-bit integers as strings.
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    };
    json!({ "key": key, "value": value })
}

/// Nanoseconds since the Unix epoch as a decimal string; pre-epoch times
/// clamp to zero.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_carries_resource() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "storefront-search")]);
        let formatter = OtlpFormatter::new(resource, "storefront-search");

        let doc = formatter.format_batch(&[]);
        let resource_spans = &doc["resourceSpans"][0];
        let attrs = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.iter().any(|a| a["key"] == "service.name"
            && a["value"]["stringValue"] == "storefront-search"));
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "storefront-search");
        assert!(resource_spans["scopeSpans"][0]["spans"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_attribute_encoding() {
        assert_eq!(
            attribute("count", &Value::I64(6)),
            json!({ "key": "count", "value": { "intValue": "6" } })
        );
        assert_eq!(
            attribute("pending", &Value::Bool(true)),
            json!({ "key": "pending", "value": { "boolValue": true } })
        );
    }

    #[test]
    fn test_unix_nanos_clamps_before_epoch() {
        assert_eq!(unix_nanos(UNIX_EPOCH), "0");
        assert_eq!(unix_nanos(UNIX_EPOCH + std::time::Duration::from_micros(1)), "1000");
    }
}
