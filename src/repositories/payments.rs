use crate::common::context::Context;
use crate::entities::payments::Payment;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

const TABLE_NAME: &str = "payments";
const READ_FIELDS: &str = "id, lease_id, reference, amount, due_date, paid_at";

pub struct CreatePaymentArgs<'a> {
    pub lease_id: i64,
    pub tenant_id: i64,
    pub reference: &'a str,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub paid_at: DateTime<Utc>,
    pub points: i32,
    pub on_time: bool,
}

/// Records the payment and its loyalty accrual together; the ledger
/// never drifts from the payments table.
pub async fn create_with_loyalty<C: Context>(
    ctx: &C,
    args: CreatePaymentArgs<'_>,
) -> sqlx::Result<u64> {
    const INSERT_PAYMENT: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (lease_id, reference, amount, due_date, paid_at) VALUES (?, ?, ?, ?, ?)"
    );
    const INSERT_LOYALTY: &str = "INSERT INTO loyalty_entries \
(tenant_id, payment_id, points, on_time) VALUES (?, ?, ?, ?)";

    let mut tx = ctx.db().begin().await?;
    let result = sqlx::query(INSERT_PAYMENT)
        .bind(args.lease_id)
        .bind(args.reference)
        .bind(args.amount)
        .bind(args.due_date)
        .bind(args.paid_at)
        .execute(&mut *tx)
        .await?;
    let payment_id = result.last_insert_id();
    sqlx::query(INSERT_LOYALTY)
        .bind(args.tenant_id)
        .bind(payment_id)
        .bind(args.points)
        .bind(args.on_time)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(payment_id)
}

pub async fn fetch_by_lease<C: Context>(ctx: &C, lease_id: i64) -> sqlx::Result<Vec<Payment>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE lease_id = ? ORDER BY due_date DESC"
    );
    sqlx::query_as(QUERY)
        .bind(lease_id)
        .fetch_all(ctx.db())
        .await
}
