use serde::{Deserialize, Serialize};

use crate::domain::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
        }
    }

    /// Job still occupies the workshop
    pub fn is_active(&self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::InProgress)
    }
}

/// Work order for one vehicle visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: String,
    pub job_number: String,
    pub customer: String,
    pub vehicle: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub status: JobStatus,
    pub estimated_cost: f64,
    pub assigned_to: String,
    pub created_at: String,
    pub due_date: String,
}

impl Resource for JobCard {
    fn collection_name() -> &'static str {
        "job-cards"
    }

    fn list_name() -> &'static str {
        "Job Cards"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_card_from_backend_json() {
        let json = r#"{
            "id": "1",
            "jobNumber": "JC-2024-001",
            "customer": "John Smith",
            "vehicle": "Toyota Camry 2022",
            "services": ["Oil Change", "Filter Replacement"],
            "status": "in-progress",
            "estimatedCost": 150,
            "assignedTo": "Mike Tech",
            "createdAt": "2024-03-18",
            "dueDate": "2024-03-19"
        }"#;
        let card: JobCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.status, JobStatus::InProgress);
        assert!(card.status.is_active());
        assert_eq!(card.services.len(), 2);
        assert_eq!(card.estimated_cost, 150.0);
    }
}
