//! Typed tracker state on top of the string key-value store.
//!
//! Companies and statuses are stored as JSON under fixed keys. Corrupt values are
//! logged and treated as empty so a bad entry never locks the user out.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::company::CompanyRecord;
use crate::models::status::{LeadStatus, StatusMap};

use super::Database;

/// Key holding the JSON array of parsed companies.
pub const COMPANIES_KEY: &str = "lead-tracker-companies-v1";
/// Key holding the JSON object of company name to status.
pub const STATUSES_KEY: &str = "lead-tracker-statuses-v1";

impl Database {
    /// Load stored companies; missing or corrupt data yields an empty list.
    pub fn load_companies(&self) -> Result<Vec<CompanyRecord>> {
        let Some(raw) = self.get(COMPANIES_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(companies) => Ok(companies),
            Err(e) => {
                tracing::warn!(error = %e, "stored companies are corrupt, ignoring them");
                Ok(Vec::new())
            }
        }
    }

    /// Replace the stored companies.
    pub fn save_companies(&self, companies: &[CompanyRecord]) -> Result<()> {
        let json = serde_json::to_string(companies)?;
        self.set(COMPANIES_KEY, &json)
    }

    /// Load the status map, dropping entries whose value is not a known status string.
    pub fn load_statuses(&self) -> Result<StatusMap> {
        let Some(raw) = self.get(STATUSES_KEY)? else {
            return Ok(StatusMap::new());
        };
        let parsed: BTreeMap<String, serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(error = %e, "stored statuses are corrupt, ignoring them");
                return Ok(StatusMap::new());
            }
        };

        let mut statuses = StatusMap::new();
        for (name, value) in parsed {
            match value.as_str().and_then(LeadStatus::parse) {
                Some(status) => {
                    statuses.insert(name, status);
                }
                None => tracing::warn!(company = %name, status = %value, "dropping unknown status"),
            }
        }
        Ok(statuses)
    }

    /// Replace the stored status map.
    pub fn save_statuses(&self, statuses: &StatusMap) -> Result<()> {
        let json = serde_json::to_string(statuses)?;
        self.set(STATUSES_KEY, &json)
    }

    /// Remove both companies and statuses.
    pub fn clear_state(&self) -> Result<()> {
        self.remove(COMPANIES_KEY)?;
        self.remove(STATUSES_KEY)
    }
}
