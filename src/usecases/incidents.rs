use crate::adapters::discord;
use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::incidents::{CreateIncidentRequest, Incident, IncidentStatus};
use crate::models::sessions::Session;
use crate::models::users::UserRole;
use crate::repositories::incidents;
use crate::usecases::properties;

pub async fn create<C: Context>(
    ctx: &C,
    session: &Session,
    request: &CreateIncidentRequest,
) -> ServiceResult<Incident> {
    let apartment = properties::fetch_apartment(ctx, request.apartment_id).await?;
    let incident_id = incidents::create(
        ctx,
        apartment.apartment_id,
        session.user_id,
        &request.title,
        &request.description,
        request.priority,
    )
    .await?;
    let incident = fetch_one(ctx, incident_id as i64).await?;

    // Ops ping only; a webhook outage must not fail the report.
    let alert = format!(
        "[{}] {} (apartment #{})",
        incident.priority.as_str(),
        incident.title,
        incident.apartment_id
    );
    if let Err(e) = discord::alert("New incident", &alert).await {
        tracing::error!("Failed to send incident alert: {e:?}");
    }

    Ok(incident)
}

pub async fn fetch_one<C: Context>(ctx: &C, incident_id: i64) -> ServiceResult<Incident> {
    match incidents::fetch_one(ctx, incident_id).await {
        Ok(incident) => Incident::try_from(incident),
        Err(sqlx::Error::RowNotFound) => Err(AppError::IncidentsNotFound),
        Err(e) => unexpected(e),
    }
}

/// Admins see every incident, tenants only their own reports.
pub async fn list_for<C: Context>(ctx: &C, session: &Session) -> ServiceResult<Vec<Incident>> {
    let entities = match session.role {
        UserRole::Admin => incidents::fetch_all(ctx).await?,
        UserRole::Client => incidents::fetch_by_tenant(ctx, session.user_id).await?,
    };
    entities.into_iter().map(Incident::try_from).collect()
}

pub async fn update_status<C: Context>(
    ctx: &C,
    incident_id: i64,
    status: IncidentStatus,
) -> ServiceResult<Incident> {
    let updated = incidents::update_status(ctx, incident_id, status).await?;
    if !updated {
        return Err(AppError::IncidentsNotFound);
    }
    fetch_one(ctx, incident_id).await
}
