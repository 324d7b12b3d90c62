use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Lease {
    pub id: i64,
    pub apartment_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub rent_amount: Decimal,
    pub charges_amount: Decimal,
    pub deposit_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
