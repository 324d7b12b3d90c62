use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::sessions::Session;
use crate::models::users::{CreateTenantRequest, User};
use crate::usecases::users;
use axum::Json;

pub async fn create(
    ctx: RequestContext,
    session: Session,
    Json(request): Json<CreateTenantRequest>,
) -> ServiceResponse<User> {
    session.require_staff()?;
    let tenant = users::create_tenant(&ctx, request).await?;
    Ok(Json(tenant))
}

pub async fn list(ctx: RequestContext, session: Session) -> ServiceResponse<Vec<User>> {
    session.require_staff()?;
    let tenants = users::fetch_tenants(&ctx).await?;
    Ok(Json(tenants))
}
