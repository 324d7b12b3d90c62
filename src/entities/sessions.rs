use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: i64,
    pub display_name: String,
    pub role: String,
    pub privileges: i32,
    pub updated_at: DateTime<Utc>,
}

pub struct CreateSessionArgs {
    pub user_id: i64,
    pub display_name: String,
    pub role: String,
    pub privileges: i32,
}
