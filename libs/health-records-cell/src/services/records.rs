use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use shared_config::AppConfig;
use shared_utils::simulate_latency;

use crate::models::{DoctorVisit, HealthRecordsSummary, LabResult, Prescription};

/// Read-only records backed by fixed mock data. Only the configured mock
/// user has any records; every other id gets empty lists.
pub struct HealthRecordsService {
    mock_user_id: String,
    latency_ms: u64,
}

impl HealthRecordsService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            mock_user_id: config.mock_user_id.clone(),
            latency_ms: config.mock_latency_ms,
        }
    }

    pub async fn lab_results(&self, user_id: &str) -> Result<Vec<LabResult>> {
        debug!("Fetching lab results for user {}", user_id);
        self.begin(user_id).await?;

        if !self.has_records(user_id) {
            return Ok(Vec::new());
        }

        Ok(vec![
            LabResult {
                id: "1".to_string(),
                test_name: "Cholesterol".to_string(),
                result: "200".to_string(),
                date: record_date()?,
            },
            LabResult {
                id: "2".to_string(),
                test_name: "Blood Sugar".to_string(),
                result: "100".to_string(),
                date: record_date()?,
            },
        ])
    }

    pub async fn prescriptions(&self, user_id: &str) -> Result<Vec<Prescription>> {
        debug!("Fetching prescriptions for user {}", user_id);
        self.begin(user_id).await?;

        if !self.has_records(user_id) {
            return Ok(Vec::new());
        }

        Ok(vec![
            Prescription {
                id: "1".to_string(),
                medication_name: "Lipitor".to_string(),
                dosage: "10mg".to_string(),
                date: record_date()?,
            },
            Prescription {
                id: "2".to_string(),
                medication_name: "Metformin".to_string(),
                dosage: "500mg".to_string(),
                date: record_date()?,
            },
        ])
    }

    pub async fn doctor_visits(&self, user_id: &str) -> Result<Vec<DoctorVisit>> {
        debug!("Fetching doctor visits for user {}", user_id);
        self.begin(user_id).await?;

        if !self.has_records(user_id) {
            return Ok(Vec::new());
        }

        Ok(vec![
            DoctorVisit {
                id: "1".to_string(),
                doctor_name: "Dr. Smith".to_string(),
                date: record_date()?,
                notes: "Regular checkup.".to_string(),
            },
            DoctorVisit {
                id: "2".to_string(),
                doctor_name: "Dr. Jones".to_string(),
                date: record_date()?,
                notes: "Follow up appointment.".to_string(),
            },
        ])
    }

    /// The three lists are independent, so they are fetched concurrently.
    pub async fn summary(&self, user_id: &str) -> Result<HealthRecordsSummary> {
        let (lab_results, prescriptions, doctor_visits) = tokio::try_join!(
            self.lab_results(user_id),
            self.prescriptions(user_id),
            self.doctor_visits(user_id)
        )?;

        Ok(HealthRecordsSummary {
            user_id: user_id.to_string(),
            lab_results,
            prescriptions,
            doctor_visits,
        })
    }

    async fn begin(&self, user_id: &str) -> Result<()> {
        ensure!(!user_id.trim().is_empty(), "User id is required");
        simulate_latency(self.latency_ms).await;
        Ok(())
    }

    fn has_records(&self, user_id: &str) -> bool {
        user_id == self.mock_user_id
    }
}

fn record_date() -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid mock record date")
}
