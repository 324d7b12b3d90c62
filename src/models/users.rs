use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::users::User as UserEntity;
use crate::models::privileges::Privileges;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which portal a user belongs to. Doubles as the sender side on
/// messages, since every message is authored from one of the portals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Client,
}

impl UserRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Client => "client",
        }
    }

    pub const fn other(&self) -> UserRole {
        match self {
            UserRole::Admin => UserRole::Client,
            UserRole::Client => UserRole::Admin,
        }
    }

    pub fn parse(raw: &str) -> ServiceResult<Self> {
        match raw {
            "admin" => Ok(UserRole::Admin),
            "client" => Ok(UserRole::Client),
            other => unexpected(anyhow::anyhow!("unknown user role: {other}")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(skip)]
    pub privileges: Privileges,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl TryFrom<UserEntity> for User {
    type Error = AppError;

    fn try_from(value: UserEntity) -> ServiceResult<Self> {
        Ok(Self {
            user_id: value.id,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            role: UserRole::parse(&value.role)?,
            privileges: Privileges::from_bits_retain(value.privileges),
            created_at: value.created_at,
        })
    }
}

#[derive(Deserialize)]
pub struct CreateTenantRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}
