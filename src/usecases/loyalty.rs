use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::loyalty::LoyaltySummary;
use crate::repositories::loyalty;
use crate::usecases::users;

pub async fn summary_for_tenant<C: Context>(
    ctx: &C,
    tenant_id: i64,
) -> ServiceResult<LoyaltySummary> {
    users::fetch_one(ctx, tenant_id).await?;
    let totals = loyalty::fetch_totals(ctx, tenant_id).await?;
    Ok(LoyaltySummary::from(totals))
}

/// Every tenant's standing, best first, for the admin dashboard.
pub async fn overview<C: Context>(ctx: &C) -> ServiceResult<Vec<LoyaltySummary>> {
    let totals = loyalty::fetch_overview(ctx).await?;
    let mut summaries: Vec<LoyaltySummary> =
        totals.into_iter().map(LoyaltySummary::from).collect();
    summaries.sort_by_key(|summary| std::cmp::Reverse(summary.points));
    Ok(summaries)
}
