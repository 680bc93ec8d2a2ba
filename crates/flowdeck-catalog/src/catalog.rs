//! Catalog lookup and search

use crate::agent_type::{AgentCategory, AgentType};
use crate::builtin;
use flowdeck_core::AgentTypeId;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::new(builtin::agent_types()));

/// Read-only registry of agent types
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    agents: Vec<AgentType>,
}

impl Catalog {
    /// Catalog from an explicit agent list
    #[inline]
    #[must_use]
    pub fn new(agents: Vec<AgentType>) -> Self {
        Self { agents }
    }

    /// The built-in catalog shipped with Flowdeck
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Look up an agent type by slug
    #[must_use]
    pub fn get(&self, id: &AgentTypeId) -> Option<&AgentType> {
        self.agents.iter().find(|a| &a.id == id)
    }

    /// Look up by raw slug string
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&AgentType> {
        self.agents.iter().find(|a| a.id.as_str() == slug)
    }

    /// All agent types in one category, in catalog order
    #[must_use]
    pub fn by_category(&self, category: AgentCategory) -> Vec<&AgentType> {
        self.agents
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Case-insensitive substring search over names and descriptions
    ///
    /// An empty term matches everything, mirroring an empty search box.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&AgentType> {
        if term.is_empty() {
            return self.agents.iter().collect();
        }
        self.agents.iter().filter(|a| a.matches(term)).collect()
    }

    /// All agent types
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &AgentType> {
        self.agents.iter()
    }

    /// Number of agent types
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
