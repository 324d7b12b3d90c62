use crate::adapters::mailer;
use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::applications::{
    Application, ApplicationStatus, SubmitApplicationRequest,
};
use crate::repositories::applications;
use crate::usecases::properties;
use chrono::Utc;

pub async fn submit<C: Context>(
    ctx: &C,
    request: &SubmitApplicationRequest,
) -> ServiceResult<Application> {
    properties::fetch_apartment(ctx, request.apartment_id).await?;
    let application_id = applications::create(ctx, request).await?;
    fetch_one(ctx, application_id as i64).await
}

pub async fn fetch_one<C: Context>(ctx: &C, application_id: i64) -> ServiceResult<Application> {
    match applications::fetch_one(ctx, application_id).await {
        Ok(application) => Application::try_from(application),
        Err(sqlx::Error::RowNotFound) => Err(AppError::ApplicationsNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Application>> {
    let entities = applications::fetch_all(ctx).await?;
    entities.into_iter().map(Application::try_from).collect()
}

pub async fn accept<C: Context>(ctx: &C, application_id: i64) -> ServiceResult<Application> {
    review(ctx, application_id, ApplicationStatus::Accepted).await
}

/// Rejects a pending application and emails the applicant the reason.
/// The notice is fire-and-forget: the decision stands even when the
/// mail collaborator is down.
pub async fn reject<C: Context>(
    ctx: &C,
    application_id: i64,
    reason: &str,
) -> ServiceResult<Application> {
    let application = review(ctx, application_id, ApplicationStatus::Rejected).await?;

    if let Err(e) =
        mailer::send_rejection_notice(&application.email, &application.applicant_name, reason)
            .await
    {
        tracing::error!(
            application_id = application.application_id,
            "Failed to send rejection notice: {e:?}"
        );
    }

    Ok(application)
}

async fn review<C: Context>(
    ctx: &C,
    application_id: i64,
    status: ApplicationStatus,
) -> ServiceResult<Application> {
    // Probe first so an unknown id reads as not-found, not as a
    // review conflict.
    fetch_one(ctx, application_id).await?;
    let reviewed = applications::review(ctx, application_id, status, Utc::now()).await?;
    if !reviewed {
        return Err(AppError::ApplicationsAlreadyReviewed);
    }
    fetch_one(ctx, application_id).await
}
