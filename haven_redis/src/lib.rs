//! Basic redis operations backing the response cache. Values are always
//! serialized JSON bodies; keys are canonical request paths.

pub mod delete;
pub mod set;

use anyhow::Context;
use redis::AsyncCommands;

/// Gets a cached JSON body, `None` on miss.
pub async fn get_optional(client: &redis::Client, key: &str) -> anyhow::Result<Option<String>> {
    let mut redis_connection = client
        .get_multiplexed_async_connection()
        .await
        .context("unable to connect to redis")?;

    let value = redis_connection
        .get::<&str, Option<String>>(key)
        .await
        .with_context(|| format!("unable to get value for key {}", key))?;

    Ok(value)
}
