use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::models::messages::{Message, UploadFile};
use crate::models::sessions::Session;
use crate::repositories::messages;
use crate::usecases::{attachments, conversations};
use chrono::Utc;

const MAX_MESSAGE_LENGTH: usize = 2000;

pub async fn fetch_for_conversation<C: Context>(
    ctx: &C,
    session: &Session,
    conversation_id: i64,
) -> ServiceResult<Vec<Message>> {
    let conversation = conversations::fetch_one_for(ctx, session, conversation_id).await?;
    let entities = messages::fetch_by_conversation(ctx, conversation.conversation_id).await?;
    entities.into_iter().map(Message::try_from).collect()
}

/// Sends a message into a conversation the caller participates in.
/// Validation happens before any upload or insert: a message needs
/// text or at least one file, and text is capped. Attachments are
/// uploaded first so the stored message only ever references files
/// that actually exist; an upload failure means no message.
pub async fn send<C: Context>(
    ctx: &C,
    session: &Session,
    conversation_id: i64,
    content: &str,
    files: Vec<UploadFile>,
) -> ServiceResult<Message> {
    let conversation = conversations::fetch_one_for(ctx, session, conversation_id).await?;

    let content = content.trim();
    if content.is_empty() && files.is_empty() {
        return Err(AppError::MessagesEmpty);
    }
    if content.len() > MAX_MESSAGE_LENGTH {
        return Err(AppError::MessagesTooLong);
    }

    let attachments =
        attachments::upload_for_conversation(conversation.conversation_id, files).await?;

    let created_at = Utc::now();
    let message_id = messages::create(
        ctx,
        messages::CreateMessageArgs {
            conversation_id: conversation.conversation_id,
            sender_id: session.user_id,
            sender_role: session.role,
            content,
            attachments: &attachments,
            created_at,
        },
    )
    .await?;

    Ok(Message {
        message_id,
        conversation_id: conversation.conversation_id,
        sender_id: session.user_id,
        sender_name: session.display_name.clone(),
        sender_role: session.role,
        content: content.to_string(),
        attachments,
        read_at: None,
        created_at,
    })
}
