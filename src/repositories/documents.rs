use crate::common::context::Context;
use crate::entities::documents::Document;

const TABLE_NAME: &str = "documents";
const READ_FIELDS: &str =
    "id, owner_user_id, lease_id, name, url, size, mime_type, uploaded_by, created_at";

pub struct CreateDocumentArgs<'a> {
    pub owner_user_id: i64,
    pub lease_id: Option<i64>,
    pub name: &'a str,
    pub url: &'a str,
    pub size: u64,
    pub mime_type: &'a str,
    pub uploaded_by: i64,
}

pub async fn create<C: Context>(ctx: &C, args: CreateDocumentArgs<'_>) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (owner_user_id, lease_id, name, url, size, mime_type, uploaded_by) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(args.owner_user_id)
        .bind(args.lease_id)
        .bind(args.name)
        .bind(args.url)
        .bind(args.size)
        .bind(args.mime_type)
        .bind(args.uploaded_by)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_one<C: Context>(ctx: &C, document_id: i64) -> sqlx::Result<Document> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(document_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_by_owner<C: Context>(ctx: &C, owner_user_id: i64) -> sqlx::Result<Vec<Document>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE owner_user_id = ? ORDER BY created_at DESC"
    );
    sqlx::query_as(QUERY)
        .bind(owner_user_id)
        .fetch_all(ctx.db())
        .await
}
