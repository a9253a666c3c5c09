use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    pub id: String,
    pub test_name: String,
    pub result: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub medication_name: String,
    pub dosage: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorVisit {
    pub id: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub notes: String,
}

/// Everything the dashboard shows for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordsSummary {
    pub user_id: String,
    pub lab_results: Vec<LabResult>,
    pub prescriptions: Vec<Prescription>,
    pub doctor_visits: Vec<DoctorVisit>,
}
