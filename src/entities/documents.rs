use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Document {
    pub id: i64,
    pub owner_user_id: i64,
    pub lease_id: Option<i64>,
    pub name: String,
    pub url: String,
    pub size: u64,
    pub mime_type: String,
    pub uploaded_by: i64,
    pub created_at: DateTime<Utc>,
}
