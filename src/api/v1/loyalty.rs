use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::loyalty::LoyaltySummary;
use crate::models::sessions::Session;
use crate::usecases::loyalty;
use axum::Json;
use axum::extract::Path;

pub async fn my_summary(ctx: RequestContext, session: Session) -> ServiceResponse<LoyaltySummary> {
    let summary = loyalty::summary_for_tenant(&ctx, session.user_id).await?;
    Ok(Json(summary))
}

pub async fn tenant_summary(
    ctx: RequestContext,
    session: Session,
    Path(tenant_id): Path<i64>,
) -> ServiceResponse<LoyaltySummary> {
    session.require_staff()?;
    let summary = loyalty::summary_for_tenant(&ctx, tenant_id).await?;
    Ok(Json(summary))
}

pub async fn overview(
    ctx: RequestContext,
    session: Session,
) -> ServiceResponse<Vec<LoyaltySummary>> {
    session.require_staff()?;
    let summaries = loyalty::overview(&ctx).await?;
    Ok(Json(summaries))
}
