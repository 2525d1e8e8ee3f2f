//! A hidden field

use serde::Serialize;

use crate::attributes::Attributes;
use crate::field::{Field, FieldCore};

/// Field variant whose rendered markup is a hidden input.
///
/// Contributes exactly one attribute override (`type = "hidden"`) and the
/// hidden capability flag; everything else comes from the core.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
#[must_use]
pub struct HiddenField {
    core: FieldCore,
}

impl HiddenField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name),
        }
    }

    pub fn with_value(self, value: impl Into<String>) -> Self {
        Self {
            core: self.core.with_value(value),
        }
    }

    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            core: self.core.with_attribute(name, value),
        }
    }
}

impl Field for HiddenField {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn value(&self) -> Option<&str> {
        self.core.value()
    }

    /// The core mapping merged with the fixed `type = "hidden"` override.
    /// The override wins, whatever the core carries for `type`.
    fn attributes(&self) -> Attributes {
        self.core
            .attributes()
            .merged_with(&Attributes::new().with("type", "hidden"))
    }

    fn is_hidden(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn always_renders_as_hidden() {
        let field = HiddenField::new("csrf_token").with_value("abc123");

        let attrs = field.attributes();
        assert_eq!(attrs.get("type"), Some("hidden"));
        assert_eq!(attrs.get("name"), Some("csrf_token"));
        assert_eq!(attrs.get("value"), Some("abc123"));
    }

    #[test]
    fn type_override_beats_a_conflicting_core_attribute() {
        let field = HiddenField::new("csrf_token").with_attribute("type", "text");
        assert_eq!(field.attributes().get("type"), Some("hidden"));
    }

    #[test]
    fn is_hidden_is_fixed() {
        assert!(HiddenField::new("csrf_token").is_hidden());
    }

    #[test]
    fn custom_attributes_survive_the_override() {
        let field = HiddenField::new("csrf_token")
            .with_attribute("data-expires", "300")
            .with_value("abc123");

        let attrs = field.attributes();
        assert_eq!(attrs.get("data-expires"), Some("300"));
        assert_eq!(attrs.get("type"), Some("hidden"));
    }

    #[test]
    fn works_through_the_field_trait() {
        let field: &dyn Field = &HiddenField::new("csrf_token");
        assert!(field.is_hidden());
        assert_eq!(field.name(), "csrf_token");
        assert_eq!(field.attributes().get("type"), Some("hidden"));
    }
}
