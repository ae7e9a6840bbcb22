use anyhow::Context;
use redis::AsyncCommands;

/// Caches a JSON body under the given key with an expiry.
pub async fn set_with_expiry(
    client: &redis::Client,
    key: &str,
    value: &str,
    expiry_seconds: u64,
) -> anyhow::Result<()> {
    let mut redis_connection = client
        .get_multiplexed_async_connection()
        .await
        .context("unable to connect to redis")?;

    redis_connection
        .set_ex::<&str, &str, ()>(key, value, expiry_seconds)
        .await
        .with_context(|| format!("unable to set key {} with expiry", key))?;

    Ok(())
}
