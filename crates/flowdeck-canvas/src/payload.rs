//! Drop payload decoding
//!
//! Drag sources encode the agent type under more than one key (a plain-text
//! slug, a vendor-specific entry, or a small JSON object), so decoding tries
//! each representation in order and tolerates whatever is missing.

use flowdeck_core::AgentTypeId;
use serde_json::Value;

/// Keys probed for the agent slug, in priority order
const SLUG_KEYS: &[&str] = &["text/plain", "application/x-agent-id", "application/json"];

/// The key/value entries carried by a drop event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropPayload {
    entries: Vec<(String, String)>,
}

impl DropPayload {
    /// Empty payload
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload with a single plain-text slug, the common case
    #[must_use]
    pub fn text(slug: impl Into<String>) -> Self {
        Self::new().with_entry("text/plain", slug)
    }

    /// Add an entry under a transfer key
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Raw value under a key, if present and non-empty
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    /// Decode the agent type slug, trying each known encoding in order
    #[must_use]
    pub fn agent_type_id(&self) -> Option<AgentTypeId> {
        for key in SLUG_KEYS {
            if let Some(raw) = self.get(key) {
                if let Some(slug) = decode_slug(raw) {
                    return Some(slug);
                }
            }
        }
        None
    }
}

/// A slug either arrives bare or wrapped in a JSON string/object
fn decode_slug(raw: &str) -> Option<AgentTypeId> {
    let raw = raw.trim();
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        match value {
            Value::String(s) if !s.is_empty() => return Some(AgentTypeId::new(s)),
            Value::Object(map) => {
                for key in ["agentTypeId", "agentId", "id"] {
                    if let Some(Value::String(s)) = map.get(key) {
                        if !s.is_empty() {
                            return Some(AgentTypeId::new(s.clone()));
                        }
                    }
                }
                return None;
            }
            _ => {}
        }
    }
    if raw.is_empty() {
        None
    } else {
        Some(AgentTypeId::new(raw))
    }
}
