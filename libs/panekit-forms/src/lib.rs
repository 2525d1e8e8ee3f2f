//! Form-field primitives for markup rendering
//!
//! Data-only building blocks a form renderer consumes: an insertion-ordered
//! attribute map with one explicit merge rule, the field capability trait,
//! and the input variants. No validation, no rendering, no side effects.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod attributes;
pub mod field;
pub mod hidden;

// Re-export commonly used types
pub use attributes::Attributes;
pub use field::{Field, FieldCore, TextField};
pub use hidden::HiddenField;
