use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::incidents::Incident as IncidentEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentPriority {
    Low,
    Medium,
    High,
}

impl IncidentPriority {
    pub const fn as_str(&self) -> &'static str {
        match self {
            IncidentPriority::Low => "low",
            IncidentPriority::Medium => "medium",
            IncidentPriority::High => "high",
        }
    }

    pub fn parse(raw: &str) -> ServiceResult<Self> {
        match raw {
            "low" => Ok(IncidentPriority::Low),
            "medium" => Ok(IncidentPriority::Medium),
            "high" => Ok(IncidentPriority::High),
            other => unexpected(anyhow::anyhow!("unknown incident priority: {other}")),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Open,
    InProgress,
    Resolved,
}

impl IncidentStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::InProgress => "in_progress",
            IncidentStatus::Resolved => "resolved",
        }
    }

    pub fn parse(raw: &str) -> ServiceResult<Self> {
        match raw {
            "open" => Ok(IncidentStatus::Open),
            "in_progress" => Ok(IncidentStatus::InProgress),
            "resolved" => Ok(IncidentStatus::Resolved),
            other => unexpected(anyhow::anyhow!("unknown incident status: {other}")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Incident {
    pub incident_id: i64,
    pub apartment_id: i64,
    pub tenant_id: i64,
    pub title: String,
    pub description: String,
    pub priority: IncidentPriority,
    pub status: IncidentStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl TryFrom<IncidentEntity> for Incident {
    type Error = AppError;

    fn try_from(value: IncidentEntity) -> ServiceResult<Self> {
        Ok(Self {
            incident_id: value.id,
            apartment_id: value.apartment_id,
            tenant_id: value.tenant_id,
            title: value.title,
            description: value.description,
            priority: IncidentPriority::parse(&value.priority)?,
            status: IncidentStatus::parse(&value.status)?,
            created_at: value.created_at,
            resolved_at: value.resolved_at,
        })
    }
}

#[derive(Deserialize)]
pub struct CreateIncidentRequest {
    pub apartment_id: i64,
    pub title: String,
    pub description: String,
    pub priority: IncidentPriority,
}

#[derive(Deserialize)]
pub struct UpdateIncidentStatusRequest {
    pub status: IncidentStatus,
}
