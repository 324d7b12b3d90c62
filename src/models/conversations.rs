use crate::entities::conversations::Conversation as ConversationEntity;
use crate::models::users::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Conversation {
    pub conversation_id: i64,
    pub tenant_id: i64,
    pub admin_id: i64,
    pub subject: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_admin: u32,
    pub unread_client: u32,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// The counter a viewer cares about: messages from the *other*
    /// side that this side has not read yet.
    pub fn unread_for(&self, viewer: UserRole) -> u32 {
        match viewer {
            UserRole::Admin => self.unread_admin,
            UserRole::Client => self.unread_client,
        }
    }
}

impl From<ConversationEntity> for Conversation {
    fn from(value: ConversationEntity) -> Self {
        Self {
            conversation_id: value.id,
            tenant_id: value.tenant_id,
            admin_id: value.admin_id,
            subject: value.subject,
            last_message_at: value.last_message_at,
            unread_admin: value.unread_admin,
            unread_client: value.unread_client,
            created_at: value.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateConversationRequest {
    pub subject: String,
    /// Required when the caller is an admin; ignored for clients,
    /// whose own id is always used.
    pub tenant_id: Option<i64>,
}

#[derive(Serialize)]
pub struct ConversationListItem {
    pub conversation_id: i64,
    pub tenant_id: i64,
    pub admin_id: i64,
    pub subject: String,
    pub tenant_name: String,
    pub unread: u32,
    pub last_message_at: DateTime<Utc>,
    pub last_message_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn conversation(unread_admin: u32, unread_client: u32) -> Conversation {
        let at = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        Conversation {
            conversation_id: 1,
            tenant_id: 7,
            admin_id: 2,
            subject: "Fuite d'eau salle de bain".to_string(),
            last_message_at: at,
            unread_admin,
            unread_client,
            created_at: at,
        }
    }

    #[test]
    fn each_side_sees_its_own_counter() {
        let conversation = conversation(3, 1);
        assert_eq!(conversation.unread_for(UserRole::Admin), 3);
        assert_eq!(conversation.unread_for(UserRole::Client), 1);
    }
}
