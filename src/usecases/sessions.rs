use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::sessions::CreateSessionArgs;
use crate::models::sessions::{LoginRequest, Session};
use crate::models::users::User;
use crate::repositories::{sessions, users};
use crate::settings::AppSettings;
use chrono::{TimeDelta, Utc};
use uuid::Uuid;

pub async fn login<C: Context>(ctx: &C, request: &LoginRequest) -> ServiceResult<Session> {
    let user = match users::fetch_one_by_email(ctx, &request.email).await {
        Ok(user) => user,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::SessionsInvalidCredentials),
        Err(e) => return unexpected(e),
    };
    if !bcrypt::verify(&request.password, &user.password_hash)? {
        return Err(AppError::SessionsInvalidCredentials);
    }

    let user = User::try_from(user)?;
    if !user.privileges.can_login() {
        return Err(AppError::SessionsLoginForbidden);
    }

    let session = sessions::create(
        ctx,
        CreateSessionArgs {
            user_id: user.user_id,
            display_name: user.display_name(),
            role: user.role.as_str().to_string(),
            privileges: user.privileges.bits(),
        },
    )
    .await?;
    Session::try_from(session)
}

/// Resolves a bearer token into a live session, refusing idle ones.
/// Every successful authentication slides the idle window forward.
pub async fn authenticate<C: Context>(ctx: &C, session_id: Uuid) -> ServiceResult<Session> {
    let Some(session) = sessions::fetch_one(ctx, session_id).await? else {
        return Err(AppError::Unauthorized);
    };

    let settings = AppSettings::get();
    let idle_deadline = session.updated_at
        + TimeDelta::seconds(settings.session_idle_timeout.as_secs() as i64);
    if idle_deadline < Utc::now() {
        sessions::delete(ctx, session.session_id, session.user_id).await?;
        return Err(AppError::Unauthorized);
    }

    let session = sessions::extend(ctx, session).await?;
    Session::try_from(session)
}

pub async fn logout<C: Context>(ctx: &C, session: &Session) -> ServiceResult<()> {
    sessions::delete(ctx, session.session_id, session.user_id).await?;
    Ok(())
}

pub async fn delete_stale<C: Context>(ctx: &C) -> ServiceResult<usize> {
    let settings = AppSettings::get();
    let idle_timeout = TimeDelta::seconds(settings.session_idle_timeout.as_secs() as i64);
    let now = Utc::now();

    let mut reaped = 0;
    let stale = sessions::fetch_all(ctx)
        .await?
        .filter(|session| session.updated_at + idle_timeout < now);
    for session in stale {
        tracing::info!(
            session_id = session.session_id.to_string(),
            user_id = session.user_id,
            "Session timed out"
        );
        sessions::delete(ctx, session.session_id, session.user_id).await?;
        reaped += 1;
    }
    Ok(reaped)
}
