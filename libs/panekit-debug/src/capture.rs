//! Bridge from `tracing` events into a shared [`BufferLog`]

use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::log::{BufferLog, LogRecord, Severity};

/// Subscriber layer that mirrors every event into a [`BufferLog`].
///
/// Installed next to the regular output layers; the shared buffer is what a
/// report presents when a request blows up.
pub struct CaptureLayer {
    buffer: Arc<BufferLog>,
}

impl CaptureLayer {
    #[must_use]
    pub fn new(buffer: Arc<BufferLog>) -> Self {
        Self { buffer }
    }

    /// The collector this layer writes to.
    #[must_use]
    pub fn buffer(&self) -> &Arc<BufferLog> {
        &self.buffer
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.buffer.push(LogRecord::new(
            Severity::from_level(*event.metadata().level()),
            event.metadata().target(),
            visitor.text,
        ));
    }
}

/// Collects the `message` field of an event, ignoring the rest.
#[derive(Default)]
struct MessageVisitor {
    text: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.text = value.to_owned();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.text = format!("{value:?}");
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn capture<F: FnOnce()>(f: F) -> Arc<BufferLog> {
        let buffer = Arc::new(BufferLog::new());
        let subscriber =
            tracing_subscriber::registry().with(CaptureLayer::new(Arc::clone(&buffer)));
        tracing::subscriber::with_default(subscriber, f);
        buffer
    }

    #[test]
    fn events_land_in_the_buffer() {
        let buffer = capture(|| {
            tracing::error!("database gone");
            tracing::info!("retrying");
        });

        let records = buffer.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].severity, Severity::Err);
        assert_eq!(records[0].message, "database gone");
        assert_eq!(records[1].severity, Severity::Info);
        assert_eq!(records[1].message, "retrying");
    }

    #[test]
    fn event_target_is_recorded() {
        let buffer = capture(|| {
            tracing::warn!(target: "app::billing", "invoice stalled");
        });

        let records = buffer.records();
        assert_eq!(records[0].target, "app::billing");
        assert_eq!(records[0].severity, Severity::Warn);
    }

    #[test]
    fn formatted_messages_are_rendered() {
        let buffer = capture(|| {
            tracing::error!("lost {} of {}", 3, 7);
        });

        assert_eq!(buffer.records()[0].message, "lost 3 of 7");
    }

    #[test]
    fn trace_events_classify_as_debug() {
        let buffer = capture(|| {
            tracing::trace!("noisy detail");
        });

        assert_eq!(buffer.records()[0].severity, Severity::Debug);
    }
}
