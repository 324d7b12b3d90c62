use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// Metadata of one uploaded file, stored inline with its message.
/// Immutable once written; `name` keeps the original filename for
/// display while `url` points at the sanitized storage key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttachmentRecord {
    pub name: String,
    pub url: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, FromRow)]
pub struct Message {
    pub id: u64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub sender_role: String,
    pub content: String,
    pub attachments: Json<Vec<AttachmentRecord>>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
