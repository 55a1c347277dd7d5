use serde::Serialize;

use crate::models::company::CompanyRecord;
use crate::models::status::StatusMap;

/// How many stored companies have been given a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
    /// Rounded percentage, 0 when there are no companies.
    pub percent: u32,
    /// Every company has a status (and there is at least one).
    pub complete: bool,
}

impl Progress {
    /// Count over all records; duplicate names count once per record.
    #[must_use]
    pub fn compute(companies: &[CompanyRecord], statuses: &StatusMap) -> Self {
        let total = companies.len();
        let processed = companies
            .iter()
            .filter(|c| statuses.contains_key(&c.name))
            .count();
        let percent = if total == 0 {
            0
        } else {
            (processed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            processed,
            total,
            percent,
            complete: total > 0 && processed == total,
        }
    }
}
