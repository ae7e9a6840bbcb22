use anyhow::Context;
use redis::AsyncCommands;

/// Drops a cached body, used when a mutation invalidates its GET.
pub async fn delete(client: &redis::Client, key: &str) -> anyhow::Result<()> {
    let mut redis_connection = client
        .get_multiplexed_async_connection()
        .await
        .context("unable to connect to redis")?;

    redis_connection
        .del::<&str, ()>(key)
        .await
        .context("unable to delete key")?;

    Ok(())
}

/// Drops every cached body a mutation touched (detail key plus list keys).
pub async fn delete_multiple(client: &redis::Client, keys: &[&str]) -> anyhow::Result<()> {
    let mut redis_connection = client
        .get_multiplexed_async_connection()
        .await
        .context("unable to connect to redis")?;

    for key in keys {
        redis_connection
            .del::<&str, ()>(key)
            .await
            .with_context(|| format!("unable to delete key {}", key))?;
    }

    Ok(())
}
