#![forbid(unsafe_code)]

//! Tracing instrumentation of log calls.
//!
//!   cargo test -p grouplog --test tracing_tests
//!
//! Without the `tracing` feature the span macros are no-ops and only the
//! zero-overhead test runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use grouplog::{CaptureSink, ColorProfile, Continuity, GroupOptions, LogGroup};

#[cfg(feature = "tracing")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span or event with its fields.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Captured {
    name: String,
    level: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

#[derive(Default)]
#[allow(dead_code)]
struct CaptureLayer {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

/// Visitor that extracts fields as strings.
#[allow(dead_code)]
struct FieldVisitor(Vec<(String, String)>);

#[cfg(feature = "tracing")]
impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

#[cfg(feature = "tracing")]
impl<S> tracing_subscriber::Layer<S> for CaptureLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);

        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.spans.lock().unwrap().push(Captured {
            name: attrs.metadata().name().to_string(),
            level: attrs.metadata().level().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);

        let parent_name = ctx
            .event_span(event)
            .map(|span_ref| span_ref.name().to_string());

        self.events.lock().unwrap().push(Captured {
            name: event.metadata().name().to_string(),
            level: event.metadata().level().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }
}

#[cfg(feature = "tracing")]
fn with_capture<F: FnOnce()>(f: F) -> (Vec<Captured>, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let spans = Arc::clone(&layer.spans);
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);

    let spans = spans.lock().unwrap().clone();
    let events = events.lock().unwrap().clone();
    (spans, events)
}

fn group(options: GroupOptions, sink: &CaptureSink) -> LogGroup<CaptureSink> {
    LogGroup::with_sink(options.color_profile(ColorProfile::Mono), sink.clone())
        .unwrap()
        .with_continuity(Continuity::new())
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn each_call_opens_a_log_group_span() {
    let sink = CaptureSink::new();
    let (spans, _) = with_capture(|| {
        let mut g = group(GroupOptions::new().title("build").fallback_width(30), &sink);
        g.log(["one"]);
        g.log(["two"]);
    });

    let calls: Vec<_> = spans.iter().filter(|s| s.name == "log_group").collect();
    assert_eq!(calls.len(), 2);
    for span in calls {
        assert_eq!(span.level, "DEBUG");
        assert_eq!(span.fields.get("title").map(String::as_str), Some("build"));
        assert_eq!(span.fields.get("width").map(String::as_str), Some("30"));
    }
}

#[test]
#[cfg(feature = "tracing")]
fn transitions_are_traced_inside_the_span() {
    let sink = CaptureSink::new();
    let (_, events) = with_capture(|| {
        let mut g = group(GroupOptions::new(), &sink);
        g.log(["a"]);
        g.log(["b"]);
    });

    let transitions: Vec<_> = events
        .iter()
        .filter_map(|e| e.fields.get("transition").cloned())
        .collect();
    assert_eq!(transitions, vec!["Open", "Continue"]);
    assert!(
        events
            .iter()
            .filter(|e| e.fields.contains_key("transition"))
            .all(|e| e.parent_name.as_deref() == Some("log_group"))
    );
}

#[test]
#[cfg(feature = "tracing")]
fn degraded_rendering_emits_debug_event() {
    let sink = CaptureSink::new();
    let (_, events) = with_capture(|| {
        let mut g = group(GroupOptions::new().padding(3).max_width(8), &sink);
        g.log(["too narrow"]);
    });

    let degraded = events
        .iter()
        .find(|e| e.fields.contains_key("inner_width"))
        .expect("degraded event");
    assert_eq!(degraded.level, "DEBUG");
    assert_eq!(degraded.fields["inner_width"], "-2");
}

#[test]
fn zero_overhead_rendering_is_unchanged() {
    let sink = CaptureSink::new();
    let mut g = group(GroupOptions::new().padding(0).fallback_width(8), &sink);
    g.log(["ok"]);
    assert_eq!(sink.screen(), vec!["╭──────╮", "│  ok  │", "╰──────╯"]);
}
