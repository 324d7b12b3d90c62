use crate::common::fmt::human_size;
use crate::entities::documents::Document as DocumentEntity;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Document {
    pub document_id: i64,
    pub owner_user_id: i64,
    pub lease_id: Option<i64>,
    pub name: String,
    pub url: String,
    pub size: u64,
    pub size_label: String,
    pub mime_type: String,
    pub uploaded_by: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DocumentEntity> for Document {
    fn from(value: DocumentEntity) -> Self {
        Self {
            document_id: value.id,
            owner_user_id: value.owner_user_id,
            lease_id: value.lease_id,
            name: value.name,
            url: value.url,
            size: value.size,
            size_label: human_size(value.size),
            mime_type: value.mime_type,
            uploaded_by: value.uploaded_by,
            created_at: value.created_at,
        }
    }
}
