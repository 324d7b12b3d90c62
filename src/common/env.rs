use std::env;
use std::error::Error;
use std::str::FromStr;

pub trait FromEnv: Sized {
    fn from_env(env_var: &str) -> anyhow::Result<Self>;
}

impl<T: FromStr> FromEnv for T
where
    <T as FromStr>::Err: 'static + Error + Send + Sync,
{
    fn from_env(env_var: &str) -> anyhow::Result<Self> {
        let value = env::var(env_var)?;
        Ok(T::from_str(&value)?)
    }
}

/// Parses an optional variable; unset is `None`, set-but-unparseable is an error.
pub fn opt_from_env<T: FromEnv>(env_var: &str) -> anyhow::Result<Option<T>> {
    match env::var(env_var) {
        Ok(_) => Ok(Some(T::from_env(env_var)?)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
