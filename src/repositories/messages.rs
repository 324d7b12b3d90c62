use crate::common::context::Context;
use crate::entities::messages::{AttachmentRecord, Message};
use crate::models::users::UserRole;
use chrono::{DateTime, Utc};
use sqlx::types::Json;

const TABLE_NAME: &str = "messages";

pub struct CreateMessageArgs<'a> {
    pub conversation_id: i64,
    pub sender_id: i64,
    pub sender_role: UserRole,
    pub content: &'a str,
    pub attachments: &'a [AttachmentRecord],
    pub created_at: DateTime<Utc>,
}

/// Appends the message and bumps the recipient side's unread counter
/// in a single transaction. Readers of the conversation row never see
/// a new message without its counter update (and vice versa), and
/// `last_message_at` is exactly the message's own `created_at`.
pub async fn create<C: Context>(ctx: &C, args: CreateMessageArgs<'_>) -> sqlx::Result<u64> {
    const INSERT_MESSAGE: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (conversation_id, sender_id, sender_role, content, attachments, created_at) ",
        "VALUES (?, ?, ?, ?, ?, ?)"
    );
    const BUMP_UNREAD_ADMIN: &str = "UPDATE conversations \
SET unread_admin = unread_admin + 1, last_message_at = ? WHERE id = ?";
    const BUMP_UNREAD_CLIENT: &str = "UPDATE conversations \
SET unread_client = unread_client + 1, last_message_at = ? WHERE id = ?";

    // A client send is awaiting the admin, and the other way around.
    let bump_counter = match args.sender_role {
        UserRole::Client => BUMP_UNREAD_ADMIN,
        UserRole::Admin => BUMP_UNREAD_CLIENT,
    };

    let mut tx = ctx.db().begin().await?;
    let result = sqlx::query(INSERT_MESSAGE)
        .bind(args.conversation_id)
        .bind(args.sender_id)
        .bind(args.sender_role.as_str())
        .bind(args.content)
        .bind(Json(args.attachments))
        .bind(args.created_at)
        .execute(&mut *tx)
        .await?;
    sqlx::query(bump_counter)
        .bind(args.created_at)
        .bind(args.conversation_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_by_conversation<C: Context>(
    ctx: &C,
    conversation_id: i64,
) -> sqlx::Result<Vec<Message>> {
    // created_at carries the display order; equal timestamps fall back
    // to insertion order via the auto-increment id.
    const QUERY: &str = const_str::concat!(
        "SELECT m.id, m.conversation_id, m.sender_id, m.sender_role, m.content, ",
        "m.attachments, m.read_at, m.created_at, ",
        "CONCAT(users.first_name, ' ', users.last_name) AS sender_name ",
        "FROM ",
        TABLE_NAME,
        " m INNER JOIN users ON m.sender_id = users.id ",
        "WHERE m.conversation_id = ? ORDER BY m.created_at ASC, m.id ASC"
    );
    sqlx::query_as(QUERY)
        .bind(conversation_id)
        .fetch_all(ctx.db())
        .await
}
