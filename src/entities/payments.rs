use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Payment {
    pub id: i64,
    pub lease_id: i64,
    pub reference: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub paid_at: DateTime<Utc>,
}
