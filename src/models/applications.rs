use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::applications::Application as ApplicationEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> ServiceResult<Self> {
        match raw {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => unexpected(anyhow::anyhow!("unknown application status: {other}")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Application {
    pub application_id: i64,
    pub apartment_id: i64,
    pub applicant_name: String,
    pub email: String,
    pub message: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl TryFrom<ApplicationEntity> for Application {
    type Error = AppError;

    fn try_from(value: ApplicationEntity) -> ServiceResult<Self> {
        Ok(Self {
            application_id: value.id,
            apartment_id: value.apartment_id,
            applicant_name: value.applicant_name,
            email: value.email,
            message: value.message,
            status: ApplicationStatus::parse(&value.status)?,
            created_at: value.created_at,
            reviewed_at: value.reviewed_at,
        })
    }
}

#[derive(Deserialize)]
pub struct SubmitApplicationRequest {
    pub apartment_id: i64,
    pub applicant_name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct RejectApplicationRequest {
    pub reason: String,
}
