use sqlx::FromRow;

/// Per-tenant aggregate over the ledger, computed by the database.
#[derive(Debug, FromRow)]
pub struct LoyaltyTotals {
    pub tenant_id: i64,
    pub points: i64,
    pub on_time_count: i64,
    pub total_count: i64,
}
