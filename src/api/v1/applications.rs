use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::applications::{
    Application, RejectApplicationRequest, SubmitApplicationRequest,
};
use crate::models::sessions::Session;
use crate::usecases::applications;
use axum::Json;
use axum::extract::Path;

/// Prospective tenants are not logged in, so submission is the one
/// unauthenticated write in the API.
pub async fn submit(
    ctx: RequestContext,
    Json(request): Json<SubmitApplicationRequest>,
) -> ServiceResponse<Application> {
    let application = applications::submit(&ctx, &request).await?;
    Ok(Json(application))
}

pub async fn list(ctx: RequestContext, session: Session) -> ServiceResponse<Vec<Application>> {
    session.require_staff()?;
    let applications = applications::fetch_all(&ctx).await?;
    Ok(Json(applications))
}

pub async fn accept(
    ctx: RequestContext,
    session: Session,
    Path(application_id): Path<i64>,
) -> ServiceResponse<Application> {
    session.require_staff()?;
    let application = applications::accept(&ctx, application_id).await?;
    Ok(Json(application))
}

pub async fn reject(
    ctx: RequestContext,
    session: Session,
    Path(application_id): Path<i64>,
    Json(request): Json<RejectApplicationRequest>,
) -> ServiceResponse<Application> {
    session.require_staff()?;
    let application = applications::reject(&ctx, application_id, &request.reason).await?;
    Ok(Json(application))
}
