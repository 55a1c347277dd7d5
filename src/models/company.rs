use serde::{Deserialize, Serialize};

/// A company parsed from pasted notes, with its insights in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub insights: Vec<String>,
}

impl CompanyRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            insights: Vec::new(),
        }
    }

    /// A record is kept only with a non-empty name and at least one insight.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.insights.is_empty()
    }

    /// Case-insensitive substring match on the name. An empty query matches.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
