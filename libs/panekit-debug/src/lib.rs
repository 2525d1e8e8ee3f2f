//! Display-ready error reports for web-service debug panes
//!
//! This crate turns a raised error, its causal chain, and the request's
//! collected log records into uniform read-only views a rendering layer can
//! consume directly. It is a pure data crate: no HTTP framework dependency,
//! no I/O. The pieces:
//! - the error description contract and its owned carrier
//!   (`Inspectable`, `CapturedError`)
//! - call-stack frames in native and display-ready form
//!   (`RawFrame`, `TraceFrame`)
//! - the log collector contract with a bounded in-memory implementation
//!   and a `tracing` bridge (`DebugLog`, `BufferLog`, `CaptureLayer`)
//! - the report itself (`ErrorReport`)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod capture;
pub mod inspect;
pub mod log;
pub mod report;
pub mod trace;

// Re-export commonly used types
pub use capture::CaptureLayer;
pub use inspect::{CapturedError, ErrorRef, Inspectable, Location};
pub use log::{BufferLog, BufferLogConfig, DebugLog, LogRecord, ParseSeverityError, Severity};
pub use report::ErrorReport;
pub use trace::{CallKind, RawFrame, TraceFrame};
