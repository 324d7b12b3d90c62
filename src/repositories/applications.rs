use crate::common::context::Context;
use crate::entities::applications::Application;
use crate::models::applications::{ApplicationStatus, SubmitApplicationRequest};
use chrono::{DateTime, Utc};

const TABLE_NAME: &str = "applications";
const READ_FIELDS: &str =
    "id, apartment_id, applicant_name, email, message, status, created_at, reviewed_at";

pub async fn create<C: Context>(
    ctx: &C,
    args: &SubmitApplicationRequest,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (apartment_id, applicant_name, email, message, status) VALUES (?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(args.apartment_id)
        .bind(&args.applicant_name)
        .bind(&args.email)
        .bind(&args.message)
        .bind(ApplicationStatus::Pending.as_str())
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_one<C: Context>(ctx: &C, application_id: i64) -> sqlx::Result<Application> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(application_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Application>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY created_at DESC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

/// Moves a pending application to its reviewed state. Returns false
/// when the application was already reviewed by someone else.
pub async fn review<C: Context>(
    ctx: &C,
    application_id: i64,
    status: ApplicationStatus,
    reviewed_at: DateTime<Utc>,
) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET status = ?, reviewed_at = ? WHERE id = ? AND status = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(status.as_str())
        .bind(reviewed_at)
        .bind(application_id)
        .bind(ApplicationStatus::Pending.as_str())
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected() > 0)
}
