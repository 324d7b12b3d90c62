use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse};
use crate::models::leases::{CreateLeaseRequest, Lease};
use crate::models::sessions::Session;
use crate::usecases::leases;
use axum::Json;
use axum::extract::Path;

pub async fn create(
    ctx: RequestContext,
    session: Session,
    Json(request): Json<CreateLeaseRequest>,
) -> ServiceResponse<Lease> {
    session.require_staff()?;
    let lease = leases::create(&ctx, &request).await?;
    Ok(Json(lease))
}

pub async fn get(
    ctx: RequestContext,
    session: Session,
    Path(lease_id): Path<i64>,
) -> ServiceResponse<Lease> {
    let lease = leases::fetch_one(&ctx, lease_id).await?;
    if session.require_staff().is_err() && lease.tenant_id != session.user_id {
        return Err(AppError::Unauthorized);
    }
    Ok(Json(lease))
}

pub async fn list_for_tenant(
    ctx: RequestContext,
    session: Session,
    Path(tenant_id): Path<i64>,
) -> ServiceResponse<Vec<Lease>> {
    if session.require_staff().is_err() && tenant_id != session.user_id {
        return Err(AppError::Unauthorized);
    }
    let leases = leases::fetch_by_tenant(&ctx, tenant_id).await?;
    Ok(Json(leases))
}

pub async fn terminate(
    ctx: RequestContext,
    session: Session,
    Path(lease_id): Path<i64>,
) -> ServiceResponse<Lease> {
    session.require_staff()?;
    let lease = leases::terminate(&ctx, lease_id).await?;
    Ok(Json(lease))
}
