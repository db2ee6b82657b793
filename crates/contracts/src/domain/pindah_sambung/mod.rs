//! Pindah-sambung: a member's request to move their registration from one
//! location to another.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    Approved,
    Rejected,
}

impl TransferStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "Menunggu",
            TransferStatus::Approved => "Disetujui",
            TransferStatus::Rejected => "Ditolak",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TransferStatus::Pending)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub id: String,
    pub member_id: String,
    pub member_name: String,
    pub origin: String,
    pub destination: String,
    pub reason: Option<String>,
    pub status: TransferStatus,
    pub requested_at: String,
}

/// Решение по заявке
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferDecisionDto {
    pub id: String,
    pub approve: bool,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_payload_shape() {
        let dto = TransferDecisionDto {
            id: "ps-9".to_string(),
            approve: false,
            note: None,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["id"], "ps-9");
        assert_eq!(value["approve"], false);
        assert!(value["note"].is_null());
    }

    #[test]
    fn test_status_codes() {
        let status: TransferStatus = serde_json::from_str("\"pending\"").unwrap();
        assert!(status.is_pending());
        assert_eq!(TransferStatus::Approved.display_name(), "Disetujui");
    }
}
