use serde::Serialize;

use crate::db::Database;
use crate::error::{LeadError, Result};

/// Result of clearing the tracker.
#[derive(Debug, Clone, Serialize)]
pub struct ClearResult {
    pub cleared: bool,
}

/// Remove all stored companies and statuses. Requires explicit confirmation.
pub fn clear_all(db: &Database, confirmed: bool) -> Result<ClearResult> {
    if !confirmed {
        return Err(LeadError::ConfirmationRequired);
    }
    db.clear_state()?;
    tracing::info!("cleared all companies and statuses");
    Ok(ClearResult { cleared: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::LeadStatus;
    use crate::operations::{get_progress, import_text, set_status};
    use crate::parser::Markers;

    #[test]
    fn clear_requires_confirmation() {
        let db = Database::open_in_memory().unwrap();
        import_text(&db, &Markers::default(), "Компания: Acme\n- a").unwrap();
        let err = clear_all(&db, false).unwrap_err();
        assert!(matches!(err, LeadError::ConfirmationRequired));
        assert_eq!(db.load_companies().unwrap().len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let db = Database::open_in_memory().unwrap();
        import_text(&db, &Markers::default(), "Компания: Acme\n- a").unwrap();
        set_status(&db, "Acme", Some(LeadStatus::Warm)).unwrap();

        assert!(clear_all(&db, true).unwrap().cleared);
        assert!(db.load_companies().unwrap().is_empty());
        assert!(db.load_statuses().unwrap().is_empty());
        assert_eq!(get_progress(&db).unwrap().total, 0);
    }
}
