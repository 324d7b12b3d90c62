use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Conversation {
    pub id: i64,
    pub tenant_id: i64,
    pub admin_id: i64,
    pub subject: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_admin: u32,
    pub unread_client: u32,
    pub created_at: DateTime<Utc>,
}
