use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Building {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct Apartment {
    pub id: i64,
    pub building_id: i64,
    pub number: String,
    pub floor: i32,
    pub surface_m2: f64,
    pub rent_amount: Decimal,
    pub charges_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
