//! Configuration schemas
//!
//! Describes the editor surface for one subtype's configuration: which keys
//! exist and what kind of control edits each. The rendering layer turns a
//! [`ConfigSchema`] into form controls; this crate only carries the shape.

use serde::{Deserialize, Serialize};

/// Kind of control that edits a configuration field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum FieldKind {
    /// Free-form text input
    Text,
    /// Boolean switch
    Toggle,
    /// Numeric input with bounds
    Number { min: f64, max: f64, step: f64 },
    /// Continuous slider with bounds
    Slider { min: f64, max: f64, step: f64 },
    /// Single choice from fixed options
    Select { options: Vec<String> },
    /// Editable list of strings
    List,
}

impl FieldKind {
    /// Select control from string options
    #[must_use]
    pub fn select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldKind::Select {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Bounded slider control
    #[inline]
    #[must_use]
    pub fn slider(min: f64, max: f64, step: f64) -> Self {
        FieldKind::Slider { min, max, step }
    }

    /// Bounded numeric input
    #[inline]
    #[must_use]
    pub fn number(min: f64, max: f64, step: f64) -> Self {
        FieldKind::Number { min, max, step }
    }
}

/// One editable configuration field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigField {
    /// Key in the node's configuration map
    pub key: String,
    /// Label shown next to the control
    pub label: String,
    /// Control kind
    pub kind: FieldKind,
}

impl ConfigField {
    /// Create a field
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Ordered set of fields for one subtype
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigSchema {
    pub fields: Vec<ConfigField>,
}

impl ConfigSchema {
    /// Schema from a field list
    #[inline]
    #[must_use]
    pub fn new(fields: Vec<ConfigField>) -> Self {
        Self { fields }
    }

    /// Fallback schema: a single free-form key/value editor
    #[must_use]
    pub fn generic() -> Self {
        Self::new(vec![ConfigField::new(
            "configuration",
            "Configuration",
            FieldKind::List,
        )])
    }

    /// Look up a field by configuration key
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&ConfigField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_by_key() {
        let schema = ConfigSchema::new(vec![
            ConfigField::new("model", "Model", FieldKind::select(["a", "b"])),
            ConfigField::new("enabled", "Enabled", FieldKind::Toggle),
        ]);
        assert_eq!(schema.field("enabled").unwrap().label, "Enabled");
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn select_builder_collects_options() {
        let kind = FieldKind::select(["x", "y"]);
        match kind {
            FieldKind::Select { options } => assert_eq!(options, vec!["x", "y"]),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn schema_serializes_with_tagged_kind() {
        let field = ConfigField::new("t", "T", FieldKind::slider(0.0, 1.0, 0.1));
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["kind"]["kind"], "slider");
    }
}
