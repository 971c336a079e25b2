//! `tracing` subscriber adapter.
//!
//! [`TagLayer`] routes tracing events through the taglog dispatcher: the
//! event target becomes the tag, the event level maps onto [`Severity`],
//! and the `message` field plus any remaining fields are flattened into the
//! message body.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::level::Severity;

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        if level == tracing::Level::ERROR {
            Self::Error
        } else if level == tracing::Level::WARN {
            Self::Warning
        } else if level == tracing::Level::INFO {
            Self::Info
        } else if level == tracing::Level::DEBUG {
            Self::Debug
        } else {
            Self::Verbose
        }
    }
}

/// Collects an event's fields into a single body line, message first.
#[derive(Default)]
struct BodyCollector {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl BodyCollector {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            if self.message.is_none() {
                self.message = Some(value);
            }
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }

    fn body(self) -> String {
        let mut body = self.message.unwrap_or_default();
        for (key, value) in self.fields {
            if !body.is_empty() {
                body.push(' ');
            }
            let _ = write!(body, "{key}={value}");
        }
        body
    }
}

impl Visit for BodyCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }
}

/// Routes tracing events through the process-wide logger.
pub struct TagLayer;

impl<S> Layer<S> for TagLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut collector = BodyCollector::default();
        event.record(&mut collector);
        let body = collector.body();

        crate::log(
            metadata.target(),
            Severity::from(*metadata.level()),
            format_args!("{body}"),
        );
    }
}

/// Installs a registry carrying [`TagLayer`] as the global tracing
/// subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(TagLayer))
}
