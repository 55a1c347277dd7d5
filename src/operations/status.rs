//! Status tagging and progress.

use serde::Serialize;

use crate::db::Database;
use crate::error::{LeadError, Result};
use crate::models::progress::Progress;
use crate::models::status::{status_label, LeadStatus};

/// Result of setting or resetting a status.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    pub name: String,
    pub status: Option<LeadStatus>,
    pub label: &'static str,
    /// Progress after the change; `complete` means every company is now tagged.
    pub progress: Progress,
}

/// Set (`Some`) or reset (`None`) the status of a stored company.
///
/// All records sharing the name share the status.
pub fn set_status(db: &Database, name: &str, status: Option<LeadStatus>) -> Result<StatusResult> {
    let companies = db.load_companies()?;
    if !companies.iter().any(|c| c.name == name) {
        return Err(LeadError::CompanyNotFound { name: name.into() });
    }

    let mut statuses = db.load_statuses()?;
    match status {
        Some(s) => {
            statuses.insert(name.to_string(), s);
        }
        None => {
            statuses.remove(name);
        }
    }
    db.save_statuses(&statuses)?;

    let progress = Progress::compute(&companies, &statuses);
    tracing::info!(
        company = name,
        status = status.map_or("none", |s| s.as_str()),
        processed = progress.processed,
        total = progress.total,
        "status updated"
    );
    if progress.complete {
        tracing::info!("all companies processed");
    }

    Ok(StatusResult {
        name: name.to_string(),
        status,
        label: status_label(status),
        progress,
    })
}

/// Progress over all stored companies.
pub fn get_progress(db: &Database) -> Result<Progress> {
    let companies = db.load_companies()?;
    let statuses = db.load_statuses()?;
    Ok(Progress::compute(&companies, &statuses))
}
