use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::incidents::{
    CreateIncidentRequest, Incident, UpdateIncidentStatusRequest,
};
use crate::models::sessions::Session;
use crate::usecases::incidents;
use axum::Json;
use axum::extract::Path;

pub async fn create(
    ctx: RequestContext,
    session: Session,
    Json(request): Json<CreateIncidentRequest>,
) -> ServiceResponse<Incident> {
    let incident = incidents::create(&ctx, &session, &request).await?;
    Ok(Json(incident))
}

pub async fn list(ctx: RequestContext, session: Session) -> ServiceResponse<Vec<Incident>> {
    let incidents = incidents::list_for(&ctx, &session).await?;
    Ok(Json(incidents))
}

pub async fn update_status(
    ctx: RequestContext,
    session: Session,
    Path(incident_id): Path<i64>,
    Json(request): Json<UpdateIncidentStatusRequest>,
) -> ServiceResponse<Incident> {
    session.require_staff()?;
    let incident = incidents::update_status(&ctx, incident_id, request.status).await?;
    Ok(Json(incident))
}
