//! Listing and lookup of stored companies with their statuses.

use serde::Serialize;

use crate::db::Database;
use crate::error::{LeadError, Result};
use crate::models::progress::Progress;
use crate::models::status::{status_label, LeadStatus};

/// A stored company together with its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyEntry {
    pub name: String,
    pub status: Option<LeadStatus>,
    pub label: &'static str,
    pub insights: Vec<String>,
}

/// Result of listing companies.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    /// Companies whose name matches the query, in stored order.
    pub entries: Vec<CompanyEntry>,
    /// Progress over all stored companies, regardless of the query.
    pub progress: Progress,
}

/// List stored companies whose name contains `query` (case-insensitive).
pub fn list_companies(db: &Database, query: &str) -> Result<ListResult> {
    let companies = db.load_companies()?;
    let statuses = db.load_statuses()?;

    let entries: Vec<CompanyEntry> = companies
        .iter()
        .filter(|c| c.matches(query))
        .map(|c| {
            let status = statuses.get(&c.name).copied();
            CompanyEntry {
                name: c.name.clone(),
                status,
                label: status_label(status),
                insights: c.insights.clone(),
            }
        })
        .collect();

    tracing::debug!(query, shown = entries.len(), total = companies.len(), "listed companies");

    Ok(ListResult {
        entries,
        progress: Progress::compute(&companies, &statuses),
    })
}

/// Show the first stored company named exactly `name`.
pub fn show_company(db: &Database, name: &str) -> Result<CompanyEntry> {
    let statuses = db.load_statuses()?;
    let company = db
        .load_companies()?
        .into_iter()
        .find(|c| c.name == name)
        .ok_or_else(|| LeadError::CompanyNotFound { name: name.into() })?;

    let status = statuses.get(&company.name).copied();
    Ok(CompanyEntry {
        name: company.name,
        status,
        label: status_label(status),
        insights: company.insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::StatusMap;
    use crate::operations::import_text;
    use crate::parser::Markers;

    fn seeded_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        import_text(
            &db,
            &Markers::default(),
            "Компания: Acme Corp\n- a\nКомпания: Beta\n- b\nКомпания: acme labs\n- c",
        )
        .unwrap();
        let mut statuses = StatusMap::new();
        statuses.insert("Beta".into(), LeadStatus::Cold);
        db.save_statuses(&statuses).unwrap();
        db
    }

    #[test]
    fn list_all_in_order() {
        let db = seeded_db();
        let result = list_companies(&db, "").unwrap();
        let names: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Corp", "Beta", "acme labs"]);
        assert_eq!(result.entries[1].status, Some(LeadStatus::Cold));
        assert_eq!(result.entries[1].label, "Не наш клиент");
        assert_eq!(result.entries[0].label, "Без статуса");
    }

    #[test]
    fn list_filters_case_insensitively() {
        let db = seeded_db();
        let result = list_companies(&db, "ACME").unwrap();
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.progress.total, 3);
        assert_eq!(result.progress.processed, 1);
    }

    #[test]
    fn list_no_match_is_empty() {
        let db = seeded_db();
        let result = list_companies(&db, "zeta").unwrap();
        assert!(result.entries.is_empty());
        assert_eq!(result.progress.total, 3);
    }

    #[test]
    fn list_on_empty_store() {
        let db = Database::open_in_memory().unwrap();
        let result = list_companies(&db, "").unwrap();
        assert!(result.entries.is_empty());
        assert_eq!(result.progress.percent, 0);
    }

    #[test]
    fn show_exact_name() {
        let db = seeded_db();
        let entry = show_company(&db, "Beta").unwrap();
        assert_eq!(entry.insights, vec!["b"]);
        assert_eq!(entry.status, Some(LeadStatus::Cold));
    }

    #[test]
    fn show_unknown_fails() {
        let db = seeded_db();
        let err = show_company(&db, "beta").unwrap_err();
        assert!(matches!(err, LeadError::CompanyNotFound { .. }));
    }
}
