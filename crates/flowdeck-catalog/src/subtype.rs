//! Agent subtypes
//!
//! Subtypes are a closed enum rather than free-form strings, so the
//! configuration schema for each kind is resolved by exhaustive dispatch and
//! adding a subtype is a compile-time-checked extension.

use crate::schema::{ConfigField, ConfigSchema, FieldKind};
use serde::{Deserialize, Serialize};

/// Behavioral subtype of an agent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentSubtype {
    // Data sources
    File,
    Email,
    Api,
    Ftp,
    Scraper,
    // Processors
    Ocr,
    Classification,
    Extraction,
    Pdf,
    Image,
    Transformation,
    Validation,
    // AI
    Llm,
    Rag,
    Mcp,
    Nlp,
    Ml,
    // Outputs
    Workflow,
    Notification,
    Report,
    Webhook,
    Storage,
    Logging,
}

impl AgentSubtype {
    /// Configuration schema rendered by the properties panel for this subtype
    #[must_use]
    pub fn config_schema(self) -> ConfigSchema {
        match self {
            AgentSubtype::Llm => ConfigSchema::new(vec![
                ConfigField::new(
                    "model",
                    "LLM Model",
                    FieldKind::select(["gpt-4-turbo", "gpt-4", "claude-3", "gemini-pro"]),
                ),
                ConfigField::new(
                    "temperature",
                    "Temperature",
                    FieldKind::slider(0.0, 1.0, 0.1),
                ),
                ConfigField::new(
                    "validationChecks",
                    "Business Rules",
                    FieldKind::select(["completeness", "accuracy", "compliance", "fraud"]),
                ),
            ]),
            AgentSubtype::Ocr => ConfigSchema::new(vec![
                ConfigField::new(
                    "language",
                    "Language",
                    FieldKind::select(["en", "es", "fr", "de", "tr", "multi"]),
                ),
                ConfigField::new(
                    "confidenceThreshold",
                    "Confidence Threshold",
                    FieldKind::slider(0.0, 1.0, 0.05),
                ),
                ConfigField::new("preserveLayout", "Preserve Layout", FieldKind::Toggle),
            ]),
            AgentSubtype::Classification => ConfigSchema::new(vec![
                ConfigField::new("categories", "Categories", FieldKind::List),
                ConfigField::new(
                    "confidenceThreshold",
                    "Confidence Threshold",
                    FieldKind::slider(0.0, 1.0, 0.05),
                ),
                ConfigField::new("manualReview", "Manual Review", FieldKind::Toggle),
            ]),
            AgentSubtype::Extraction => ConfigSchema::new(vec![
                ConfigField::new("fields", "Fields", FieldKind::List),
                ConfigField::new("useTemplates", "Use Templates", FieldKind::Toggle),
                ConfigField::new("fuzzyMatching", "Fuzzy Matching", FieldKind::Toggle),
            ]),
            AgentSubtype::Api => ConfigSchema::new(vec![
                ConfigField::new("endpoint", "Endpoint", FieldKind::Text),
                ConfigField::new(
                    "authentication",
                    "Authentication",
                    FieldKind::select(["api-key", "oauth", "basic", "none"]),
                ),
                ConfigField::new("timeout", "Timeout (s)", FieldKind::number(1.0, 300.0, 1.0)),
            ]),
            AgentSubtype::Email => ConfigSchema::new(vec![
                ConfigField::new("emailFilters", "Filters", FieldKind::List),
                ConfigField::new(
                    "pollInterval",
                    "Poll Interval (s)",
                    FieldKind::number(30.0, 3600.0, 30.0),
                ),
            ]),
            AgentSubtype::Rag => ConfigSchema::new(vec![
                ConfigField::new("vectorDb", "Vector Database", FieldKind::Text),
                ConfigField::new("regulations", "Rule Sets", FieldKind::List),
                ConfigField::new("confidence", "Confidence", FieldKind::slider(0.0, 1.0, 0.05)),
            ]),
            AgentSubtype::Ml => ConfigSchema::new(vec![
                ConfigField::new("algorithm", "Algorithm", FieldKind::Text),
                ConfigField::new(
                    "sensitivity",
                    "Sensitivity",
                    FieldKind::slider(0.0, 1.0, 0.05),
                ),
            ]),
            AgentSubtype::Notification => ConfigSchema::new(vec![
                ConfigField::new("channels", "Channels", FieldKind::List),
                ConfigField::new(
                    "scheduling",
                    "Scheduling",
                    FieldKind::select(["immediate", "batched", "daily"]),
                ),
            ]),
            AgentSubtype::Webhook => ConfigSchema::new(vec![
                ConfigField::new("webhookUrl", "Webhook URL", FieldKind::Text),
                ConfigField::new(
                    "method",
                    "Method",
                    FieldKind::select(["POST", "PUT", "PATCH"]),
                ),
                ConfigField::new(
                    "retryAttempts",
                    "Retry Attempts",
                    FieldKind::number(0.0, 10.0, 1.0),
                ),
            ]),
            // Remaining subtypes share a generic key/value editor.
            _ => ConfigSchema::generic(),
        }
    }
}

impl std::fmt::Display for AgentSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AgentSubtype::File => "file",
            AgentSubtype::Email => "email",
            AgentSubtype::Api => "api",
            AgentSubtype::Ftp => "ftp",
            AgentSubtype::Scraper => "scraper",
            AgentSubtype::Ocr => "ocr",
            AgentSubtype::Classification => "classification",
            AgentSubtype::Extraction => "extraction",
            AgentSubtype::Pdf => "pdf",
            AgentSubtype::Image => "image",
            AgentSubtype::Transformation => "transformation",
            AgentSubtype::Validation => "validation",
            AgentSubtype::Llm => "llm",
            AgentSubtype::Rag => "rag",
            AgentSubtype::Mcp => "mcp",
            AgentSubtype::Nlp => "nlp",
            AgentSubtype::Ml => "ml",
            AgentSubtype::Workflow => "workflow",
            AgentSubtype::Notification => "notification",
            AgentSubtype::Report => "report",
            AgentSubtype::Webhook => "webhook",
            AgentSubtype::Storage => "storage",
            AgentSubtype::Logging => "logging",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_schema_has_model_field() {
        let schema = AgentSubtype::Llm.config_schema();
        assert!(schema.fields.iter().any(|f| f.key == "model"));
    }

    #[test]
    fn ocr_schema_has_language_select() {
        let schema = AgentSubtype::Ocr.config_schema();
        let language = schema.fields.iter().find(|f| f.key == "language").unwrap();
        assert!(matches!(language.kind, FieldKind::Select { .. }));
    }

    #[test]
    fn unknown_subtypes_fall_back_to_generic() {
        let schema = AgentSubtype::Logging.config_schema();
        assert_eq!(schema, ConfigSchema::generic());
    }

    #[test]
    fn subtype_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AgentSubtype::Llm).unwrap(),
            "\"llm\""
        );
        assert_eq!(AgentSubtype::Ocr.to_string(), "ocr");
    }

    #[test]
    fn display_matches_the_wire_form_for_every_subtype() {
        let all = [
            AgentSubtype::File,
            AgentSubtype::Email,
            AgentSubtype::Api,
            AgentSubtype::Ftp,
            AgentSubtype::Scraper,
            AgentSubtype::Ocr,
            AgentSubtype::Classification,
            AgentSubtype::Extraction,
            AgentSubtype::Pdf,
            AgentSubtype::Image,
            AgentSubtype::Transformation,
            AgentSubtype::Validation,
            AgentSubtype::Llm,
            AgentSubtype::Rag,
            AgentSubtype::Mcp,
            AgentSubtype::Nlp,
            AgentSubtype::Ml,
            AgentSubtype::Workflow,
            AgentSubtype::Notification,
            AgentSubtype::Report,
            AgentSubtype::Webhook,
            AgentSubtype::Storage,
            AgentSubtype::Logging,
        ];
        for subtype in all {
            let wire = serde_json::to_string(&subtype).unwrap();
            assert_eq!(format!("\"{subtype}\""), wire);
        }
    }
}
