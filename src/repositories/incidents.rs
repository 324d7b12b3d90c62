use crate::common::context::Context;
use crate::entities::incidents::Incident;
use crate::models::incidents::{IncidentPriority, IncidentStatus};
use chrono::Utc;

const TABLE_NAME: &str = "incidents";
const READ_FIELDS: &str =
    "id, apartment_id, tenant_id, title, description, priority, status, created_at, resolved_at";

pub async fn create<C: Context>(
    ctx: &C,
    apartment_id: i64,
    tenant_id: i64,
    title: &str,
    description: &str,
    priority: IncidentPriority,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (apartment_id, tenant_id, title, description, priority, status) ",
        "VALUES (?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(apartment_id)
        .bind(tenant_id)
        .bind(title)
        .bind(description)
        .bind(priority.as_str())
        .bind(IncidentStatus::Open.as_str())
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_one<C: Context>(ctx: &C, incident_id: i64) -> sqlx::Result<Incident> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(incident_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Incident>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY created_at DESC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_by_tenant<C: Context>(ctx: &C, tenant_id: i64) -> sqlx::Result<Vec<Incident>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE tenant_id = ? ORDER BY created_at DESC"
    );
    sqlx::query_as(QUERY)
        .bind(tenant_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn update_status<C: Context>(
    ctx: &C,
    incident_id: i64,
    status: IncidentStatus,
) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET status = ?, resolved_at = ? WHERE id = ?"
    );
    let resolved_at = match status {
        IncidentStatus::Resolved => Some(Utc::now()),
        _ => None,
    };
    let result = sqlx::query(QUERY)
        .bind(status.as_str())
        .bind(resolved_at)
        .bind(incident_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected() > 0)
}
