use crate::common::error::{AppError, ServiceResult};
use crate::common::fmt::human_size;
use crate::entities::messages::{AttachmentRecord, Message as MessageEntity};
use crate::models::users::UserRole;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug)]
pub struct Message {
    pub message_id: u64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub sender_role: UserRole,
    pub content: String,
    pub attachments: Vec<AttachmentRecord>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<MessageEntity> for Message {
    type Error = AppError;

    fn try_from(value: MessageEntity) -> ServiceResult<Self> {
        Ok(Self {
            message_id: value.id,
            conversation_id: value.conversation_id,
            sender_id: value.sender_id,
            sender_name: value.sender_name,
            sender_role: UserRole::parse(&value.sender_role)?,
            content: value.content,
            attachments: value.attachments.0,
            read_at: value.read_at,
            created_at: value.created_at,
        })
    }
}

/// A file handed to the upload pipeline, straight out of the request.
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// How an attachment is presented: images get an inline preview,
/// everything else a download entry. Decided from the stored MIME
/// type alone, never from the filename.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    File,
}

impl AttachmentKind {
    pub fn classify(mime_type: &str) -> Self {
        match mime_type.starts_with("image/") {
            true => AttachmentKind::Image,
            false => AttachmentKind::File,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AttachmentView {
    pub name: String,
    pub url: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub kind: AttachmentKind,
    pub size_label: String,
}

impl From<&AttachmentRecord> for AttachmentView {
    fn from(record: &AttachmentRecord) -> Self {
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            size: record.size,
            mime_type: record.mime_type.clone(),
            kind: AttachmentKind::classify(&record.mime_type),
            size_label: human_size(record.size),
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message_id: u64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub sender_role: UserRole,
    pub content: String,
    pub attachments: Vec<AttachmentView>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        let attachments = message.attachments.iter().map(AttachmentView::from).collect();
        Self {
            message_id: message.message_id,
            conversation_id: message.conversation_id,
            sender_id: message.sender_id,
            sender_name: message.sender_name,
            sender_role: message.sender_role,
            content: message.content,
            attachments,
            read_at: message.read_at,
            created_at: message.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_mime_prefix_classifies_as_image() {
        assert_eq!(AttachmentKind::classify("image/png"), AttachmentKind::Image);
        assert_eq!(AttachmentKind::classify("image/svg+xml"), AttachmentKind::Image);
    }

    #[test]
    fn non_image_mime_classifies_as_file() {
        assert_eq!(
            AttachmentKind::classify("application/pdf"),
            AttachmentKind::File
        );
        assert_eq!(AttachmentKind::classify("text/plain"), AttachmentKind::File);
    }

    #[test]
    fn bare_image_without_slash_is_not_an_image() {
        assert_eq!(AttachmentKind::classify("image"), AttachmentKind::File);
    }

    #[test]
    fn view_keeps_original_name_and_labels_size() {
        let record = AttachmentRecord {
            name: "rapport final.pdf".to_string(),
            url: "https://cdn.example.com/conversations/12/1710000000000_rapport_final.pdf"
                .to_string(),
            size: 2 * 1024 * 1024,
            mime_type: "application/pdf".to_string(),
        };
        let view = AttachmentView::from(&record);
        assert_eq!(view.name, "rapport final.pdf");
        assert_eq!(view.kind, AttachmentKind::File);
        assert_eq!(view.size_label, "2.0 MB");
    }
}
