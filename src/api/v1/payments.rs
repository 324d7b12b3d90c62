use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::payments::{Payment, RecordPaymentRequest};
use crate::models::sessions::Session;
use crate::usecases::payments;
use axum::Json;
use axum::extract::Path;

pub async fn record(
    ctx: RequestContext,
    session: Session,
    Json(request): Json<RecordPaymentRequest>,
) -> ServiceResponse<Payment> {
    session.require_staff()?;
    let payment = payments::record(&ctx, &request).await?;
    Ok(Json(payment))
}

pub async fn list_for_lease(
    ctx: RequestContext,
    session: Session,
    Path(lease_id): Path<i64>,
) -> ServiceResponse<Vec<Payment>> {
    let payments = payments::fetch_by_lease(&ctx, &session, lease_id).await?;
    Ok(Json(payments))
}
