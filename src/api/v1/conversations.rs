use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse, ServiceResult};
use crate::models::conversations::{
    Conversation, ConversationListItem, CreateConversationRequest,
};
use crate::models::messages::{MessageResponse, UploadFile};
use crate::models::sessions::Session;
use crate::usecases::{conversations, messages};
use axum::Json;
use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use chrono::Local;

pub async fn list(
    ctx: RequestContext,
    session: Session,
) -> ServiceResponse<Vec<ConversationListItem>> {
    // Labels like "Hier" depend on the clock, so they are computed
    // fresh on every request rather than stored.
    let items = conversations::list_for(&ctx, &session, Local::now()).await?;
    Ok(Json(items))
}

pub async fn create(
    ctx: RequestContext,
    session: Session,
    Json(request): Json<CreateConversationRequest>,
) -> ServiceResponse<Conversation> {
    let conversation = conversations::create(&ctx, &session, &request).await?;
    Ok(Json(conversation))
}

pub async fn get(
    ctx: RequestContext,
    session: Session,
    Path(conversation_id): Path<i64>,
) -> ServiceResponse<Conversation> {
    let conversation = conversations::fetch_one_for(&ctx, &session, conversation_id).await?;
    Ok(Json(conversation))
}

pub async fn list_messages(
    ctx: RequestContext,
    session: Session,
    Path(conversation_id): Path<i64>,
) -> ServiceResponse<Vec<MessageResponse>> {
    let messages = messages::fetch_for_conversation(&ctx, &session, conversation_id).await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Multipart form: one optional `content` text part and any number of
/// `files` parts, kept in the order they arrive.
pub async fn send_message(
    ctx: RequestContext,
    session: Session,
    Path(conversation_id): Path<i64>,
    mut multipart: Multipart,
) -> ServiceResponse<MessageResponse> {
    let mut content = String::new();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::DecodingRequestFailed)?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("content") => {
                content = field
                    .text()
                    .await
                    .map_err(|_| AppError::DecodingRequestFailed)?;
            }
            Some("files") => {
                let name = field.file_name().unwrap_or("fichier").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::DecodingRequestFailed)?;
                files.push(UploadFile {
                    name,
                    mime_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let message = messages::send(&ctx, &session, conversation_id, &content, files).await?;
    Ok(Json(MessageResponse::from(message)))
}

pub async fn mark_read(
    ctx: RequestContext,
    session: Session,
    Path(conversation_id): Path<i64>,
) -> ServiceResult<StatusCode> {
    conversations::mark_read(&ctx, &session, conversation_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
