use crate::common::context::Context;
use crate::common::redis_json::Json;
use crate::entities::sessions::{CreateSessionArgs, Session};
use redis::AsyncCommands;
use std::ops::DerefMut;
use uuid::Uuid;

const SESSIONS_KEY: &str = "gestloc:sessions";

fn make_user_key(user_id: i64) -> String {
    format!("gestloc:sessions:user_ids:{user_id}")
}

pub async fn create<C: Context>(ctx: &C, args: CreateSessionArgs) -> anyhow::Result<Session> {
    let mut redis = ctx.redis().await?;
    let session = Session {
        session_id: Uuid::new_v4(),
        user_id: args.user_id,
        display_name: args.display_name,
        role: args.role,
        privileges: args.privileges,
        updated_at: chrono::Utc::now(),
    };
    let user_key = make_user_key(session.user_id);
    redis::pipe()
        .atomic()
        .hset(SESSIONS_KEY, session.session_id, Json(&session))
        .ignore()
        .sadd(user_key, session.session_id)
        .ignore()
        .exec_async(redis.deref_mut())
        .await?;
    Ok(session)
}

pub async fn fetch_one<C: Context>(ctx: &C, session_id: Uuid) -> anyhow::Result<Option<Session>> {
    let mut redis = ctx.redis().await?;
    let session: Option<Json<Session>> = redis.hget(SESSIONS_KEY, session_id).await?;
    Ok(session.map(Json::into_inner))
}

pub async fn fetch_all<C: Context>(ctx: &C) -> anyhow::Result<impl Iterator<Item = Session>> {
    let mut redis = ctx.redis().await?;
    let sessions: Vec<Json<Session>> = redis.hvals(SESSIONS_KEY).await?;
    Ok(sessions.into_iter().map(Json::into_inner))
}

pub async fn extend<C: Context>(ctx: &C, mut session: Session) -> anyhow::Result<Session> {
    session.updated_at = chrono::Utc::now();
    let mut redis = ctx.redis().await?;
    let _: () = redis
        .hset(SESSIONS_KEY, session.session_id, Json(&session))
        .await?;
    Ok(session)
}

pub async fn delete<C: Context>(ctx: &C, session_id: Uuid, user_id: i64) -> anyhow::Result<()> {
    let mut redis = ctx.redis().await?;
    let user_key = make_user_key(user_id);
    redis::pipe()
        .atomic()
        .hdel(SESSIONS_KEY, session_id)
        .ignore()
        .srem(user_key, session_id)
        .ignore()
        .exec_async(redis.deref_mut())
        .await?;
    Ok(())
}
