//! Generic field abstraction shared by all variants

use serde::Serialize;

use crate::attributes::Attributes;

/// Rendering metadata common to every field variant.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct FieldCore {
    name: String,
    value: Option<String>,
    attributes: Attributes,
}

impl FieldCore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Custom attributes only, without the reserved entries.
    #[must_use]
    pub fn custom_attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Full mapping: the custom attributes merged with the reserved `name`
    /// and `value` entries. Reserved entries win; `value` appears only when
    /// the field carries one.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        let mut reserved = Attributes::new().with("name", self.name.clone());
        if let Some(value) = &self.value {
            reserved.set("value", value.clone());
        }
        self.attributes.merged_with(&reserved)
    }
}

/// Capability shared by renderable form fields.
pub trait Field {
    fn name(&self) -> &str;

    fn value(&self) -> Option<&str>;

    /// Full attribute mapping, including the variant's own overrides.
    fn attributes(&self) -> Attributes;

    /// Whether the rendered markup is invisible to the user.
    fn is_hidden(&self) -> bool {
        false
    }
}

/// Visible single-line input.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
#[must_use]
pub struct TextField {
    core: FieldCore,
}

impl TextField {
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

impl Field for TextField {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn value(&self) -> Option<&str> {
        self.core.value()
    }

    /// Defaults `type` to `"text"`; an explicit `type` attribute stands.
    fn attributes(&self) -> Attributes {
        let mut attrs = self.core.attributes();
        if !attrs.contains("type") {
            attrs.set("type", "text");
        }
        attrs
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn core_reserves_name_and_value() {
        let core = FieldCore::new("email")
            .with_value("a@b.example")
            .with_attribute("class", "wide")
            .with_attribute("name", "spoofed");

        let attrs = core.attributes();
        assert_eq!(attrs.get("name"), Some("email"));
        assert_eq!(attrs.get("value"), Some("a@b.example"));
        assert_eq!(attrs.get("class"), Some("wide"));
    }

    #[test]
    fn core_without_value_has_no_value_entry() {
        let attrs = FieldCore::new("email").attributes();
        assert_eq!(attrs.get("value"), None);
    }

    #[test]
    fn text_field_defaults_type() {
        let field = TextField::new("email");
        assert_eq!(field.attributes().get("type"), Some("text"));
        assert!(!field.is_hidden());
    }

    #[test]
    fn text_field_honors_explicit_type() {
        let field = TextField::new("email").with_attribute("type", "email");
        assert_eq!(field.attributes().get("type"), Some("email"));
    }
}
