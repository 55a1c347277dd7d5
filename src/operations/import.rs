//! Import operations: parse pasted notes and replace the stored company list.

use serde::Serialize;

use crate::db::Database;
use crate::error::{LeadError, Result};
use crate::operations::sample::SAMPLE_TEXT;
use crate::parser::{is_blank, CompanyParser, Markers};

/// Result of importing a block of notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    /// Number of companies stored.
    pub companies: usize,
    /// Total number of insights across them.
    pub insights: usize,
}

/// Parse `text` and replace the stored companies. Statuses are kept.
pub fn import_text(db: &Database, markers: &Markers, text: &str) -> Result<ImportResult> {
    let text = text.trim_matches(is_blank);
    if text.is_empty() {
        return Err(LeadError::EmptyInput);
    }

    let companies = CompanyParser::with_markers(markers.clone()).parse(text);
    if companies.is_empty() {
        tracing::info!(bytes = text.len(), "no company headers found");
        return Err(LeadError::NoCompaniesDetected);
    }

    db.save_companies(&companies)?;

    let result = ImportResult {
        companies: companies.len(),
        insights: companies.iter().map(|c| c.insights.len()).sum(),
    };
    tracing::info!(
        companies = result.companies,
        insights = result.insights,
        "imported companies"
    );
    Ok(result)
}

/// Import the built-in sample notes.
///
/// The sample is written with the default markers, so it ignores configured ones.
pub fn load_sample(db: &Database) -> Result<ImportResult> {
    import_text(db, &Markers::default(), SAMPLE_TEXT)
}
