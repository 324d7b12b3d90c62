use crate::common::context::Context;
use crate::entities::loyalty::LoyaltyTotals;

const TABLE_NAME: &str = "loyalty_entries";

// SUM() comes back as DECIMAL from MySQL, so cast to keep the row
// decodable as plain integers.
const TOTALS_FIELDS: &str = "tenant_id, \
CAST(COALESCE(SUM(points), 0) AS SIGNED) AS points, \
CAST(COALESCE(SUM(on_time), 0) AS SIGNED) AS on_time_count, \
COUNT(*) AS total_count";

pub async fn fetch_totals<C: Context>(ctx: &C, tenant_id: i64) -> sqlx::Result<LoyaltyTotals> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        TOTALS_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE tenant_id = ? GROUP BY tenant_id"
    );
    let totals = sqlx::query_as(QUERY)
        .bind(tenant_id)
        .fetch_optional(ctx.db())
        .await?;
    Ok(totals.unwrap_or(LoyaltyTotals {
        tenant_id,
        points: 0,
        on_time_count: 0,
        total_count: 0,
    }))
}

pub async fn fetch_overview<C: Context>(ctx: &C) -> sqlx::Result<Vec<LoyaltyTotals>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        TOTALS_FIELDS,
        " FROM ",
        TABLE_NAME,
        " GROUP BY tenant_id"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}
