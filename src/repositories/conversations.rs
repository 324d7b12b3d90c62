use crate::common::context::Context;
use crate::entities::conversations::Conversation;
use crate::models::users::UserRole;
use chrono::{DateTime, Utc};

const TABLE_NAME: &str = "conversations";
const READ_FIELDS: &str =
    "id, tenant_id, admin_id, subject, last_message_at, unread_admin, unread_client, created_at";

pub async fn create<C: Context>(
    ctx: &C,
    tenant_id: i64,
    admin_id: i64,
    subject: &str,
) -> sqlx::Result<u64> {
    // last_message_at starts at creation time so ordering stays total
    // even before the first message lands.
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (tenant_id, admin_id, subject, last_message_at, unread_admin, unread_client) ",
        "VALUES (?, ?, ?, ?, 0, 0)"
    );
    let result = sqlx::query(QUERY)
        .bind(tenant_id)
        .bind(admin_id)
        .bind(subject)
        .bind(Utc::now())
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_one<C: Context>(ctx: &C, conversation_id: i64) -> sqlx::Result<Conversation> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(conversation_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Conversation>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY last_message_at DESC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_by_tenant<C: Context>(
    ctx: &C,
    tenant_id: i64,
) -> sqlx::Result<Vec<Conversation>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE tenant_id = ? ORDER BY last_message_at DESC"
    );
    sqlx::query_as(QUERY)
        .bind(tenant_id)
        .fetch_all(ctx.db())
        .await
}

/// Acknowledges every message the viewer has not seen yet and zeroes
/// the viewer's counter, atomically. A viewer only ever clears
/// messages sent by the *other* side; their own sends are untouched.
pub async fn mark_read<C: Context>(
    ctx: &C,
    conversation_id: i64,
    viewer: UserRole,
    read_at: DateTime<Utc>,
) -> sqlx::Result<()> {
    const ACK_MESSAGES: &str = "UPDATE messages SET read_at = ? \
WHERE conversation_id = ? AND sender_role = ? AND read_at IS NULL";
    const RESET_ADMIN: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET unread_admin = 0 WHERE id = ?"
    );
    const RESET_CLIENT: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET unread_client = 0 WHERE id = ?"
    );

    let sender_side = viewer.other();
    let reset_counter = match viewer {
        UserRole::Admin => RESET_ADMIN,
        UserRole::Client => RESET_CLIENT,
    };

    let mut tx = ctx.db().begin().await?;
    sqlx::query(ACK_MESSAGES)
        .bind(read_at)
        .bind(conversation_id)
        .bind(sender_side.as_str())
        .execute(&mut *tx)
        .await?;
    sqlx::query(reset_counter)
        .bind(conversation_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}
