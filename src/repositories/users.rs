use crate::common::context::Context;
use crate::entities::users::{CreateUserArgs, User};

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str =
    "id, email, password_hash, first_name, last_name, phone, role, privileges, created_at";

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one_by_email<C: Context>(ctx: &C, email: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE email = ?"
    );
    sqlx::query_as(QUERY).bind(email).fetch_one(ctx.db()).await
}

pub async fn fetch_many<C: Context>(ctx: &C, user_ids: &[i64]) -> sqlx::Result<Vec<User>> {
    if user_ids.is_empty() {
        return Ok(vec![]);
    }
    let mut query = sqlx::QueryBuilder::<sqlx::MySql>::new(const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id IN ("
    ));
    let mut ids = query.separated(", ");
    for user_id in user_ids {
        ids.push_bind(user_id);
    }
    ids.push_unseparated(")");
    query.build_query_as().fetch_all(ctx.db()).await
}

pub async fn fetch_all_by_role<C: Context>(ctx: &C, role: &str) -> sqlx::Result<Vec<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE role = ? ORDER BY last_name, first_name"
    );
    sqlx::query_as(QUERY).bind(role).fetch_all(ctx.db()).await
}

/// The admin conversations get attached to when a tenant starts one.
pub async fn fetch_default_admin<C: Context>(ctx: &C) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE role = 'admin' ORDER BY id LIMIT 1"
    );
    sqlx::query_as(QUERY).fetch_one(ctx.db()).await
}

pub async fn create<C: Context>(ctx: &C, args: CreateUserArgs) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (email, password_hash, first_name, last_name, phone, role, privileges) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(&args.email)
        .bind(&args.password_hash)
        .bind(&args.first_name)
        .bind(&args.last_name)
        .bind(&args.phone)
        .bind(&args.role)
        .bind(args.privileges)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}
