use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::models::loyalty::payment_points;
use crate::models::payments::{Payment, RecordPaymentRequest};
use crate::models::sessions::Session;
use crate::repositories::payments;
use crate::usecases::leases;
use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;

fn make_reference() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("PAY-{}", suffix.to_uppercase())
}

/// Records a rent payment. Loyalty accrual rides the same transaction:
/// on-time settles for full points, late for a token amount.
pub async fn record<C: Context>(
    ctx: &C,
    request: &RecordPaymentRequest,
) -> ServiceResult<Payment> {
    let lease = leases::fetch_one(ctx, request.lease_id).await?;

    let paid_at = request.paid_at.unwrap_or_else(Utc::now);
    let on_time = paid_at.date_naive() <= request.due_date;
    let reference = make_reference();

    let payment_id = payments::create_with_loyalty(
        ctx,
        payments::CreatePaymentArgs {
            lease_id: lease.lease_id,
            tenant_id: lease.tenant_id,
            reference: &reference,
            amount: request.amount,
            due_date: request.due_date,
            paid_at,
            points: payment_points(on_time),
            on_time,
        },
    )
    .await?;

    Ok(Payment {
        payment_id: payment_id as i64,
        lease_id: lease.lease_id,
        reference,
        amount: request.amount,
        due_date: request.due_date,
        paid_at,
    })
}

pub async fn fetch_by_lease<C: Context>(
    ctx: &C,
    session: &Session,
    lease_id: i64,
) -> ServiceResult<Vec<Payment>> {
    let lease = leases::fetch_one(ctx, lease_id).await?;
    if session.require_staff().is_err() && lease.tenant_id != session.user_id {
        return Err(AppError::Unauthorized);
    }
    let entities = payments::fetch_by_lease(ctx, lease.lease_id).await?;
    Ok(entities.into_iter().map(Payment::from).collect())
}
