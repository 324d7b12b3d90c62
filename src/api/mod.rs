use crate::common::context::Context;
use crate::common::error::AppError;
use crate::common::init;
use crate::common::redis_pool::{PoolResult, RedisPool};
use crate::common::state::AppState;
use crate::models::sessions::Session;
use crate::settings::AppSettings;
use crate::usecases::sessions;
use async_trait::async_trait;
use axum::Router;
use axum::extract::{DefaultBodyLimit, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sqlx::{MySql, Pool};
use std::net::SocketAddr;
use uuid::Uuid;

pub mod v1;

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub redis: RedisPool,
}

pub fn router(settings: &AppSettings) -> Router<AppState> {
    Router::new()
        .nest("/api/v1", v1::router())
        // multipart uploads carry whole files, so the default 2 MB
        // body cap is far too small
        .layer(DefaultBodyLimit::max(settings.max_attachment_size * 4))
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Serving API on {addr}");
    axum::serve(listener, router(settings).with_state(state)).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
            redis: state.redis.clone(),
        })
    }
}

/// Bearer-token authentication. Handlers taking a `Session` only run
/// for live portal sessions; everything else bounces at the boundary.
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;
        let session_id = Uuid::parse_str(token).map_err(|_| AppError::Unauthorized)?;

        let ctx = RequestContext {
            db: state.db.clone(),
            redis: state.redis.clone(),
        };
        sessions::authenticate(&ctx, session_id).await
    }
}

#[async_trait]
impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    async fn redis(&self) -> PoolResult {
        self.redis.get().await
    }
}
