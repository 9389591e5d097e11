//! Tally value object

use crate::agenda::status::{SessionStatus, deserialize_lenient};
use serde::{Deserialize, Serialize};

/// Snapshot of an agenda item's vote counts (Value Object)
///
/// Superseded by every new fetch. A payload whose `status` is missing,
/// null or unrecognised is read as a closed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Affirmative votes
    #[serde(rename = "sim")]
    pub yes: u64,
    /// Negative votes
    #[serde(rename = "nao")]
    pub no: u64,
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub status: SessionStatus,
}

impl Tally {
    pub fn new(yes: u64, no: u64, status: SessionStatus) -> Self {
        Self {
            yes,
            no,
            total: yes + no,
            status,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Share of affirmative votes (0.0 to 1.0)
    pub fn yes_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.yes as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_payload() {
        let tally: Tally =
            serde_json::from_str(r#"{"sim": 3, "nao": 1, "total": 4, "status": "ABERTA"}"#)
                .unwrap();
        assert_eq!(tally, Tally::new(3, 1, SessionStatus::Open));
    }

    #[test]
    fn test_missing_status_reads_as_closed() {
        let tally: Tally = serde_json::from_str(r#"{"sim": 0, "nao": 0, "total": 0}"#).unwrap();
        assert_eq!(tally.status, SessionStatus::Closed);
        assert!(!tally.is_open());
    }

    #[test]
    fn test_unknown_or_null_status_reads_as_closed() {
        let unknown: Tally =
            serde_json::from_str(r#"{"sim": 2, "nao": 0, "total": 2, "status": "?"}"#).unwrap();
        assert_eq!(unknown, Tally::new(2, 0, SessionStatus::Closed));

        let null: Tally =
            serde_json::from_str(r#"{"sim": 0, "nao": 0, "total": 0, "status": null}"#).unwrap();
        assert_eq!(null.status, SessionStatus::Closed);
    }

    #[test]
    fn test_yes_ratio() {
        assert_eq!(Tally::default().yes_ratio(), 0.0);
        assert_eq!(Tally::new(3, 1, SessionStatus::Open).yes_ratio(), 0.75);
    }
}
