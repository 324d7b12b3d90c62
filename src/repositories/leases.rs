use crate::common::context::Context;
use crate::entities::leases::Lease;
use crate::models::leases::LeaseStatus;
use crate::models::properties::ApartmentStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;

const TABLE_NAME: &str = "leases";
const READ_FIELDS: &str = "id, apartment_id, tenant_id, start_date, end_date, \
rent_amount, charges_amount, deposit_amount, status, created_at";

pub struct CreateLeaseArgs {
    pub apartment_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,
    pub rent_amount: Decimal,
    pub charges_amount: Decimal,
    pub deposit_amount: Decimal,
}

/// Inserts the lease and flips the apartment to occupied in one
/// transaction, so a lease never exists against a vacant-listed unit.
pub async fn create<C: Context>(ctx: &C, args: CreateLeaseArgs) -> sqlx::Result<u64> {
    const INSERT_LEASE: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (apartment_id, tenant_id, start_date, rent_amount, charges_amount, deposit_amount, status) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    const OCCUPY_APARTMENT: &str = "UPDATE apartments SET status = ? WHERE id = ?";

    let mut tx = ctx.db().begin().await?;
    let result = sqlx::query(INSERT_LEASE)
        .bind(args.apartment_id)
        .bind(args.tenant_id)
        .bind(args.start_date)
        .bind(args.rent_amount)
        .bind(args.charges_amount)
        .bind(args.deposit_amount)
        .bind(LeaseStatus::Active.as_str())
        .execute(&mut *tx)
        .await?;
    sqlx::query(OCCUPY_APARTMENT)
        .bind(ApartmentStatus::Occupied.as_str())
        .bind(args.apartment_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_one<C: Context>(ctx: &C, lease_id: i64) -> sqlx::Result<Lease> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(lease_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_by_tenant<C: Context>(ctx: &C, tenant_id: i64) -> sqlx::Result<Vec<Lease>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE tenant_id = ? ORDER BY start_date DESC"
    );
    sqlx::query_as(QUERY)
        .bind(tenant_id)
        .fetch_all(ctx.db())
        .await
}

/// Terminates an active lease and frees the apartment. Returns whether
/// a lease row was actually transitioned.
pub async fn terminate<C: Context>(
    ctx: &C,
    lease_id: i64,
    apartment_id: i64,
    end_date: NaiveDate,
) -> sqlx::Result<bool> {
    const TERMINATE_LEASE: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET status = ?, end_date = ? WHERE id = ? AND status = ?"
    );
    const FREE_APARTMENT: &str = "UPDATE apartments SET status = ? WHERE id = ?";

    let mut tx = ctx.db().begin().await?;
    let result = sqlx::query(TERMINATE_LEASE)
        .bind(LeaseStatus::Terminated.as_str())
        .bind(end_date)
        .bind(lease_id)
        .bind(LeaseStatus::Active.as_str())
        .execute(&mut *tx)
        .await?;
    let terminated = result.rows_affected() > 0;
    if terminated {
        sqlx::query(FREE_APARTMENT)
            .bind(ApartmentStatus::Vacant.as_str())
            .bind(apartment_id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(terminated)
}
