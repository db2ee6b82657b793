use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "L")]
    Male,
    #[serde(rename = "P")]
    Female,
}

impl Gender {
    pub fn short_label(&self) -> &'static str {
        match self {
            Gender::Male => "L",
            Gender::Female => "P",
        }
    }
}

/// Статус записи переписи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CensusStatus {
    Active,
    Moved,
    Deceased,
}

impl CensusStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            CensusStatus::Active => "Aktif",
            CensusStatus::Moved => "Pindah",
            CensusStatus::Deceased => "Meninggal",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            CensusStatus::Active => "badge badge--success",
            CensusStatus::Moved => "badge badge--warning",
            CensusStatus::Deceased => "badge badge--neutral",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusRecord {
    pub id: String,
    /// Nomor induk anggota
    pub member_number: String,
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub region: String,
    pub district: String,
    pub status: CensusStatus,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_record_from_backend_payload() {
        let json = r#"{
            "id": "c-1",
            "member_number": "31.71.0042",
            "full_name": "Siti Aminah",
            "gender": "P",
            "birth_date": "1987-05-02",
            "region": "DKI Jakarta",
            "district": "Menteng",
            "status": "moved",
            "updated_at": "2024-10-01T08:00:00Z"
        }"#;

        let record: CensusRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.status, CensusStatus::Moved);
        assert_eq!(record.birth_date, NaiveDate::from_ymd_opt(1987, 5, 2));
    }
}
