use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::models::sessions::{LoginRequest, LoginResponse, Session, SessionResponse};
use crate::usecases::sessions;
use axum::Json;
use axum::http::StatusCode;

pub async fn login(
    ctx: RequestContext,
    Json(request): Json<LoginRequest>,
) -> ServiceResponse<LoginResponse> {
    let session = sessions::login(&ctx, &request).await?;
    Ok(Json(LoginResponse {
        token: session.session_id,
        user_id: session.user_id,
        display_name: session.display_name,
        role: session.role,
    }))
}

pub async fn logout(ctx: RequestContext, session: Session) -> ServiceResult<StatusCode> {
    sessions::logout(&ctx, &session).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(session: Session) -> ServiceResponse<SessionResponse> {
    Ok(Json(SessionResponse::from(session)))
}
