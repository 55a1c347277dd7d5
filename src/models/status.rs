use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label shown for a company without a status.
pub const NO_STATUS_LABEL: &str = "Без статуса";

/// Qualification status a user assigns to a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Hot,
    Warm,
    Cold,
}

impl LeadStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hot" => Some(Self::Hot),
            "warm" => Some(Self::Warm),
            "cold" => Some(Self::Cold),
            _ => None,
        }
    }

    /// Human label ("hot lead", "regular lead", "not our client").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hot => "Горячий лид",
            Self::Warm => "Обычный лид",
            Self::Cold => "Не наш клиент",
        }
    }
}

/// Label for an optional status.
#[must_use]
pub fn status_label(status: Option<LeadStatus>) -> &'static str {
    status.map_or(NO_STATUS_LABEL, |s| s.label())
}

/// Company name to status. Companies without an entry have no status.
pub type StatusMap = BTreeMap<String, LeadStatus>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_as_str() {
        for status in [LeadStatus::Hot, LeadStatus::Warm, LeadStatus::Cold] {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(LeadStatus::parse(""), None);
        assert_eq!(LeadStatus::parse("HOT"), None);
        assert_eq!(LeadStatus::parse("lukewarm"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(status_label(Some(LeadStatus::Hot)), "Горячий лид");
        assert_eq!(status_label(Some(LeadStatus::Cold)), "Не наш клиент");
        assert_eq!(status_label(None), NO_STATUS_LABEL);
    }

    #[test]
    fn status_map_serializes_as_object() {
        let mut map = StatusMap::new();
        map.insert("Acme".into(), LeadStatus::Warm);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Acme":"warm"}"#);
    }
}
