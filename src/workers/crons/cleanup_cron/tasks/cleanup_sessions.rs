use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::usecases::sessions;

/// Drops portal sessions that sat idle past the configured timeout.
pub async fn cleanup_sessions<C: Context>(ctx: &C) -> ServiceResult<usize> {
    sessions::delete_stale(ctx).await
}
