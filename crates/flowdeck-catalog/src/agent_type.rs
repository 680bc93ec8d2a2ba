//! Agent type metadata
//!
//! An agent type is a labeled category of pipeline step (OCR, validator,
//! notifier). Purely descriptive: nothing in this core executes one.

use crate::subtype::AgentSubtype;
use flowdeck_core::AgentTypeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level category an agent type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentCategory {
    /// Produces data (file intake, email monitor, API gateway)
    DataSource,
    /// Transforms or inspects data (OCR, extraction, validation)
    Processor,
    /// Model-backed steps (LLM, RAG, anomaly detection)
    Ai,
    /// Side-effecting sinks (notifications, ERP updates, reports)
    Output,
}

impl AgentCategory {
    /// All categories in library display order
    #[must_use]
    pub fn all() -> [AgentCategory; 4] {
        [
            AgentCategory::DataSource,
            AgentCategory::Processor,
            AgentCategory::Ai,
            AgentCategory::Output,
        ]
    }
}

impl std::fmt::Display for AgentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AgentCategory::DataSource => "data-source",
            AgentCategory::Processor => "processor",
            AgentCategory::Ai => "ai",
            AgentCategory::Output => "output",
        };
        write!(f, "{s}")
    }
}

/// Display metadata and defaults for one agent type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentType {
    /// Catalog slug
    pub id: AgentTypeId,
    /// Human-readable name
    pub name: String,
    /// Library category
    pub category: AgentCategory,
    /// Behavioral subtype, drives the configuration schema
    pub subtype: AgentSubtype,
    /// One-line description shown in the library and on nodes
    pub description: String,
    /// Icon identifier (consumer-defined namespace)
    pub icon: String,
    /// Accent color token
    pub color: String,
    /// Configuration a freshly placed node starts from
    pub default_configuration: Map<String, Value>,
}

impl AgentType {
    /// Create an agent type with empty defaults
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: AgentCategory,
        subtype: AgentSubtype,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: AgentTypeId::new(id),
            name: name.into(),
            category,
            subtype,
            description: description.into(),
            icon: String::new(),
            color: String::new(),
            default_configuration: Map::new(),
        }
    }

    /// With icon identifier
    #[inline]
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// With accent color token
    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// With default configuration object
    ///
    /// Non-object values are ignored and leave the defaults empty.
    #[must_use]
    pub fn with_defaults(mut self, config: Value) -> Self {
        if let Value::Object(map) = config {
            self.default_configuration = map;
        }
        self
    }

    /// Whether the search term matches name or description, case-insensitive
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
