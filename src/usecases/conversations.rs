use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::common::fmt::relative_time;
use crate::models::conversations::{
    Conversation, ConversationListItem, CreateConversationRequest,
};
use crate::models::sessions::Session;
use crate::models::users::UserRole;
use crate::repositories::conversations;
use crate::usecases::users;
use chrono::{DateTime, Local, Utc};

pub async fn create<C: Context>(
    ctx: &C,
    session: &Session,
    request: &CreateConversationRequest,
) -> ServiceResult<Conversation> {
    let (tenant_id, admin_id) = match session.role {
        UserRole::Admin => {
            let tenant_id = request.tenant_id.ok_or(AppError::DecodingRequestFailed)?;
            let tenant = users::fetch_one(ctx, tenant_id).await?;
            if tenant.role != UserRole::Client {
                return Err(AppError::UsersNotFound);
            }
            (tenant_id, session.user_id)
        }
        UserRole::Client => {
            let admin = users::fetch_default_admin(ctx).await?;
            (session.user_id, admin.user_id)
        }
    };

    let conversation_id =
        conversations::create(ctx, tenant_id, admin_id, &request.subject).await?;
    fetch_one_for(ctx, session, conversation_id as i64).await
}

/// Fetches a conversation the caller is allowed to see. A client only
/// ever sees their own threads; a missing and a foreign conversation
/// are indistinguishable on purpose.
pub async fn fetch_one_for<C: Context>(
    ctx: &C,
    session: &Session,
    conversation_id: i64,
) -> ServiceResult<Conversation> {
    let conversation = match conversations::fetch_one(ctx, conversation_id).await {
        Ok(conversation) => Conversation::from(conversation),
        Err(sqlx::Error::RowNotFound) => return Err(AppError::ConversationsNotFound),
        Err(e) => return unexpected(e),
    };
    if session.role == UserRole::Client && conversation.tenant_id != session.user_id {
        return Err(AppError::ConversationsNotFound);
    }
    Ok(conversation)
}

/// The caller's conversation list, most recently active first, with
/// the viewer-side unread counter and a relative-time label computed
/// against `now` (labels move as time does, so this is per request).
pub async fn list_for<C: Context>(
    ctx: &C,
    session: &Session,
    now: DateTime<Local>,
) -> ServiceResult<Vec<ConversationListItem>> {
    let entities = match session.role {
        UserRole::Admin => conversations::fetch_all(ctx).await?,
        UserRole::Client => conversations::fetch_by_tenant(ctx, session.user_id).await?,
    };

    let tenant_ids: Vec<i64> = entities.iter().map(|c| c.tenant_id).collect();
    let tenant_names = users::fetch_display_names(ctx, &tenant_ids).await?;

    let items = entities
        .into_iter()
        .map(Conversation::from)
        .map(|conversation| {
            let tenant_name = tenant_names
                .get(&conversation.tenant_id)
                .cloned()
                .unwrap_or_default();
            let last_message_label =
                relative_time(&conversation.last_message_at.to_rfc3339(), now);
            let unread = conversation.unread_for(session.role);
            ConversationListItem {
                conversation_id: conversation.conversation_id,
                tenant_id: conversation.tenant_id,
                admin_id: conversation.admin_id,
                subject: conversation.subject,
                tenant_name,
                unread,
                last_message_at: conversation.last_message_at,
                last_message_label,
            }
        })
        .collect();
    Ok(items)
}

/// The viewer acknowledges everything the other side sent. Their own
/// outgoing counter is left alone.
pub async fn mark_read<C: Context>(
    ctx: &C,
    session: &Session,
    conversation_id: i64,
) -> ServiceResult<()> {
    let conversation = fetch_one_for(ctx, session, conversation_id).await?;
    conversations::mark_read(ctx, conversation.conversation_id, session.role, Utc::now()).await?;
    Ok(())
}
