use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::users::CreateUserArgs;
use crate::models::privileges::Privileges;
use crate::models::users::{CreateTenantRequest, User, UserRole};
use crate::repositories::users;
use hashbrown::HashMap;

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<User> {
    match users::fetch_one(ctx, user_id).await {
        Ok(user) => User::try_from(user),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_one_by_email<C: Context>(ctx: &C, email: &str) -> ServiceResult<User> {
    match users::fetch_one_by_email(ctx, email).await {
        Ok(user) => User::try_from(user),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_default_admin<C: Context>(ctx: &C) -> ServiceResult<User> {
    match users::fetch_default_admin(ctx).await {
        Ok(user) => User::try_from(user),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_tenants<C: Context>(ctx: &C) -> ServiceResult<Vec<User>> {
    let tenants = users::fetch_all_by_role(ctx, UserRole::Client.as_str()).await?;
    tenants.into_iter().map(User::try_from).collect()
}

/// Display names for a batch of user ids, for decorating lists without
/// a query per row.
pub async fn fetch_display_names<C: Context>(
    ctx: &C,
    user_ids: &[i64],
) -> ServiceResult<HashMap<i64, String>> {
    let entities = users::fetch_many(ctx, user_ids).await?;
    let mut names = HashMap::with_capacity(entities.len());
    for entity in entities {
        names.insert(entity.id, format!("{} {}", entity.first_name, entity.last_name));
    }
    Ok(names)
}

pub async fn create_tenant<C: Context>(
    ctx: &C,
    request: CreateTenantRequest,
) -> ServiceResult<User> {
    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)?;
    let args = CreateUserArgs {
        email: request.email,
        password_hash,
        first_name: request.first_name,
        last_name: request.last_name,
        phone: request.phone,
        role: UserRole::Client.as_str().to_string(),
        privileges: Privileges::CanLogin.bits(),
    };
    let user_id = match users::create(ctx, args).await {
        Ok(user_id) => user_id,
        Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => {
            return Err(AppError::UsersEmailTaken);
        }
        Err(e) => return unexpected(e),
    };
    fetch_one(ctx, user_id as i64).await
}
