use crate::common::error::{AppError, ServiceResult};
use crate::entities::sessions::Session as SessionEntity;
use crate::models::privileges::Privileges;
use crate::models::users::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: i64,
    pub display_name: String,
    pub role: UserRole,
    pub privileges: Privileges,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Guards an admin-portal operation; the client portal never passes.
    pub fn require_staff(&self) -> ServiceResult<()> {
        match self.role == UserRole::Admin && self.privileges.is_staff() {
            true => Ok(()),
            false => Err(AppError::Unauthorized),
        }
    }
}

impl TryFrom<SessionEntity> for Session {
    type Error = AppError;

    fn try_from(value: SessionEntity) -> ServiceResult<Self> {
        Ok(Self {
            session_id: value.session_id,
            user_id: value.user_id,
            display_name: value.display_name,
            role: UserRole::parse(&value.role)?,
            privileges: Privileges::from_bits_retain(value.privileges),
            updated_at: value.updated_at,
        })
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub user_id: i64,
    pub display_name: String,
    pub role: UserRole,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub user_id: i64,
    pub display_name: String,
    pub role: UserRole,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            user_id: session.user_id,
            display_name: session.display_name,
            role: session.role,
        }
    }
}
