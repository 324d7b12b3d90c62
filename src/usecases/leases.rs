use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::leases::{CreateLeaseRequest, Lease, LeaseStatus};
use crate::models::properties::ApartmentStatus;
use crate::models::users::UserRole;
use crate::repositories::leases;
use crate::usecases::{properties, users};
use chrono::Utc;

pub async fn create<C: Context>(ctx: &C, request: &CreateLeaseRequest) -> ServiceResult<Lease> {
    let apartment = properties::fetch_apartment(ctx, request.apartment_id).await?;
    if apartment.status != ApartmentStatus::Vacant {
        return Err(AppError::ApartmentsNotVacant);
    }
    let tenant = users::fetch_one(ctx, request.tenant_id).await?;
    if tenant.role != UserRole::Client {
        return Err(AppError::UsersNotFound);
    }

    let lease_id = leases::create(
        ctx,
        leases::CreateLeaseArgs {
            apartment_id: apartment.apartment_id,
            tenant_id: tenant.user_id,
            start_date: request.start_date,
            rent_amount: request.rent_amount.unwrap_or(apartment.rent_amount),
            charges_amount: request.charges_amount.unwrap_or(apartment.charges_amount),
            deposit_amount: request.deposit_amount,
        },
    )
    .await?;
    fetch_one(ctx, lease_id as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, lease_id: i64) -> ServiceResult<Lease> {
    match leases::fetch_one(ctx, lease_id).await {
        Ok(lease) => Lease::try_from(lease),
        Err(sqlx::Error::RowNotFound) => Err(AppError::LeasesNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_by_tenant<C: Context>(ctx: &C, tenant_id: i64) -> ServiceResult<Vec<Lease>> {
    let leases = leases::fetch_by_tenant(ctx, tenant_id).await?;
    leases.into_iter().map(Lease::try_from).collect()
}

pub async fn terminate<C: Context>(ctx: &C, lease_id: i64) -> ServiceResult<Lease> {
    let lease = fetch_one(ctx, lease_id).await?;
    if lease.status == LeaseStatus::Terminated {
        return Err(AppError::LeasesAlreadyTerminated);
    }
    let end_date = Utc::now().date_naive();
    let terminated = leases::terminate(ctx, lease.lease_id, lease.apartment_id, end_date).await?;
    if !terminated {
        return Err(AppError::LeasesAlreadyTerminated);
    }
    fetch_one(ctx, lease_id).await
}
