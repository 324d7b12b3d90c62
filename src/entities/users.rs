use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(default)]
    pub phone: Option<String>,
    pub role: String,
    pub privileges: i32,
    pub created_at: DateTime<Utc>,
}

pub struct CreateUserArgs {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub privileges: i32,
}
