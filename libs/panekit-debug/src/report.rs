//! Display-ready projection of a raised error and its causal chain

use std::sync::Arc;

use http::StatusCode;

use crate::inspect::{ErrorRef, Inspectable};
use crate::log::{DebugLog, LogRecord, Severity};
use crate::trace::TraceFrame;

/// Everything a debug pane needs to know about one raised error.
///
/// A report is built once per displayed error and never mutates; every
/// operation is a read-only projection over the wrapped error and the
/// optional request log collector. Construction is cheap, so reports for
/// the causal chain are built lazily on demand.
#[must_use]
pub struct ErrorReport {
    exception: ErrorRef,
    logger: Option<Arc<dyn DebugLog>>,
}

impl ErrorReport {
    /// Wrap an error with no log collector.
    pub fn new(exception: impl Into<ErrorRef>) -> Self {
        Self {
            exception: exception.into(),
            logger: None,
        }
    }

    /// Attach the request's log collector.
    pub fn with_logger(mut self, logger: Arc<dyn DebugLog>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Reports for the causal chain, nearest predecessor first.
    ///
    /// Linked reports carry no collector.
    #[must_use]
    pub fn linked_reports(&self) -> Vec<ErrorReport> {
        let mut reports = Vec::new();
        let mut next = self.exception.predecessor().cloned();
        while let Some(cause) = next {
            next = cause.predecessor().cloned();
            reports.push(ErrorReport {
                exception: cause,
                logger: None,
            });
        }
        reports
    }

    /// The wrapped error.
    #[must_use]
    pub fn exception(&self) -> &(dyn Inspectable + Send + Sync) {
        self.exception.as_ref()
    }

    /// The attached collector, if any.
    #[must_use]
    pub fn logger(&self) -> Option<&Arc<dyn DebugLog>> {
        self.logger.as_ref()
    }

    /// Collected records, oldest first; empty without a collector.
    #[must_use]
    pub fn logs(&self) -> Vec<LogRecord> {
        self.logger
            .as_ref()
            .map(|logger| logger.records())
            .unwrap_or_default()
    }

    /// Number of collected records classified `ERR`; 0 without a collector.
    #[must_use]
    pub fn count_errors(&self) -> usize {
        self.logs()
            .iter()
            .filter(|record| record.severity == Severity::Err)
            .count()
    }

    /// The carried status for HTTP-typed errors, `500` for everything else.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.exception
            .http_status()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Reason phrase for [`status_code`](Self::status_code) from the fixed
    /// phrase table; `None` for codes the table does not name.
    #[must_use]
    pub fn status_text(&self) -> Option<&'static str> {
        self.status_code().canonical_reason()
    }

    /// The error message, or the literal `"n/a"` when the error carries
    /// none. An empty message passes through unchanged.
    #[must_use]
    pub fn message(&self) -> &str {
        self.exception.message().unwrap_or("n/a")
    }

    /// Human-facing label of the error kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.exception.type_label()
    }

    /// Trace records for rendering: a head entry synthesized from the
    /// error's own origin, then one normalized entry per captured frame,
    /// order preserved (innermost first).
    #[must_use]
    pub fn traces(&self) -> Vec<TraceFrame> {
        let frames = self.exception.frames();
        let mut traces = Vec::with_capacity(frames.len() + 1);
        traces.push(TraceFrame::head(self.exception.origin()));
        traces.extend(frames.iter().map(TraceFrame::from_raw));
        traces
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::inspect::CapturedError;
    use crate::log::{BufferLog, LogRecord};
    use crate::trace::{CallKind, RawFrame};

    #[test]
    fn plain_error_has_no_linked_reports() {
        let report = ErrorReport::new(CapturedError::new("app::Boom"));
        assert!(report.linked_reports().is_empty());
    }

    #[test]
    fn linked_reports_follow_the_chain_nearest_first() {
        let root = CapturedError::new("app::Request").caused_by(
            CapturedError::new("app::Service").caused_by(CapturedError::new("db::Connection")),
        );

        let logger: Arc<dyn DebugLog> = Arc::new(BufferLog::new());
        let report = ErrorReport::new(root).with_logger(logger);

        let linked = report.linked_reports();
        assert_eq!(linked.len(), 2);
        assert_eq!(linked[0].name(), "app::Service");
        assert_eq!(linked[1].name(), "db::Connection");
        assert!(linked[0].logger().is_none());
        assert!(linked[1].logger().is_none());
    }

    #[test]
    fn count_errors_matches_err_records_only() {
        let log = BufferLog::new();
        log.push(LogRecord::new(Severity::Err, "app", "boom"));
        log.push(LogRecord::new(Severity::Info, "app", "fine"));
        log.push(LogRecord::new(Severity::Err, "app", "boom again"));

        let report =
            ErrorReport::new(CapturedError::new("app::Boom")).with_logger(Arc::new(log));
        assert_eq!(report.count_errors(), 2);
        assert_eq!(report.logs().len(), 3);
    }

    #[test]
    fn no_logger_means_no_logs_and_zero_errors() {
        let report = ErrorReport::new(CapturedError::new("app::Boom"));
        assert!(report.logger().is_none());
        assert!(report.logs().is_empty());
        assert_eq!(report.count_errors(), 0);
    }

    #[test]
    fn plain_errors_default_to_internal_server_error() {
        let report = ErrorReport::new(CapturedError::new("app::Boom"));
        assert_eq!(report.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(report.status_text(), Some("Internal Server Error"));
    }

    #[test]
    fn http_typed_errors_keep_their_status() {
        let report = ErrorReport::new(
            CapturedError::new("app::NotFound").with_status(StatusCode::NOT_FOUND),
        );
        assert_eq!(report.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(report.status_text(), Some("Not Found"));
    }

    #[test]
    fn unlisted_status_has_no_phrase() {
        let status = StatusCode::from_u16(599).unwrap();
        let report =
            ErrorReport::new(CapturedError::new("app::Odd").with_status(status));
        assert_eq!(report.status_code().as_u16(), 599);
        assert_eq!(report.status_text(), None);
    }

    #[test]
    fn absent_message_becomes_the_sentinel() {
        let report = ErrorReport::new(CapturedError::new("app::Silent"));
        assert_eq!(report.message(), "n/a");
    }

    #[test]
    fn empty_message_passes_through() {
        let report = ErrorReport::new(CapturedError::new("app::Terse").with_message(""));
        assert_eq!(report.message(), "");
    }

    #[test]
    fn traces_start_with_the_synthesized_head() {
        let err = CapturedError::new("app::Boom")
            .raised_at("src/handler.rs", 21)
            .with_frame(RawFrame::new("handle").with_class("app::Handler", CallKind::Instance))
            .with_frame(RawFrame::new("dispatch"));

        let traces = ErrorReport::new(err).traces();
        assert_eq!(traces.len(), 3);

        assert_eq!(traces[0].function, "");
        assert_eq!(traces[0].class, "");
        assert_eq!(traces[0].file.as_deref(), Some("src/handler.rs"));
        assert_eq!(traces[0].line, Some(21));

        assert_eq!(traces[1].namespace, "app");
        assert_eq!(traces[1].short_class, "Handler");
        assert_eq!(traces[1].function, "handle");

        assert_eq!(traces[2].class, "");
        assert_eq!(traces[2].function, "dispatch");
    }
}
