//! Error description contract and the owned `CapturedError` carrier

use std::fmt;
use std::sync::Arc;

use http::StatusCode;

use crate::trace::RawFrame;

/// Shared handle to a reportable error.
///
/// Cause links are `Arc`s so reports over a chain can be built lazily
/// without copying the chain itself.
pub type ErrorRef = Arc<dyn Inspectable + Send + Sync>;

/// Source position where an error was raised.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl Location {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Capability implemented by error kinds that can be shown on a debug pane.
///
/// Everything is optional except the kind label: a plain error with no
/// message, no origin, no frames, and no cause is still reportable. The
/// label must be stable across runs; it is the human-facing name of the
/// error kind, not a formatted message.
pub trait Inspectable: fmt::Debug {
    /// Stable human-facing label for this error kind.
    fn type_label(&self) -> &'static str;

    /// The error text. `None` models a genuinely absent message, which is
    /// distinct from an empty one.
    fn message(&self) -> Option<&str> {
        None
    }

    /// Where the error was raised, when known.
    fn origin(&self) -> Option<&Location> {
        None
    }

    /// Call-stack snapshot taken at raise time, innermost first.
    fn frames(&self) -> &[RawFrame] {
        &[]
    }

    /// Causal predecessor, if this error was triggered by an earlier one.
    fn predecessor(&self) -> Option<&ErrorRef> {
        None
    }

    /// Status carried by HTTP-typed errors; `None` for plain errors.
    fn http_status(&self) -> Option<StatusCode> {
        None
    }
}

/// Owned snapshot of a raised error, the ready-made [`Inspectable`] carrier.
///
/// Built once with the `with_*` methods and never mutated afterwards.
#[derive(Debug, Clone)]
#[must_use]
pub struct CapturedError {
    type_label: &'static str,
    message: Option<String>,
    origin: Option<Location>,
    frames: Vec<RawFrame>,
    status: Option<StatusCode>,
    cause: Option<ErrorRef>,
}

impl CapturedError {
    pub fn new(type_label: &'static str) -> Self {
        Self {
            type_label,
            message: None,
            origin: None,
            frames: Vec::new(),
            status: None,
            cause: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn raised_at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.origin = Some(Location::new(file, line));
        self
    }

    pub fn with_frame(mut self, frame: RawFrame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn with_frames(mut self, frames: impl IntoIterator<Item = RawFrame>) -> Self {
        self.frames.extend(frames);
        self
    }

    /// Classify this capture as HTTP-typed with the given status.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn caused_by(mut self, cause: impl Into<ErrorRef>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

impl Inspectable for CapturedError {
    fn type_label(&self) -> &'static str {
        self.type_label
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn origin(&self) -> Option<&Location> {
        self.origin.as_ref()
    }

    fn frames(&self) -> &[RawFrame] {
        &self.frames
    }

    fn predecessor(&self) -> Option<&ErrorRef> {
        self.cause.as_ref()
    }

    fn http_status(&self) -> Option<StatusCode> {
        self.status
    }
}

impl From<CapturedError> for ErrorRef {
    fn from(err: CapturedError) -> Self {
        Arc::new(err)
    }
}

impl From<Arc<CapturedError>> for ErrorRef {
    fn from(err: Arc<CapturedError>) -> Self {
        err
    }
}
