//! Read-through response cache for GET endpoints.
//!
//! Handlers consult the cache first; a hit short-circuits the store query
//! and returns the cached JSON body verbatim. On a miss the handler
//! computes the body and writes it back with [`CACHE_TTL_SECONDS`].
//! Mutating handlers invalidate the keys they touch. Cache failures are
//! surfaced, not swallowed; the caller maps them to a generic server error.

use axum::http::Uri;

/// Cached GET bodies live for an hour.
pub const CACHE_TTL_SECONDS: u64 = 3600;

/// Canonical cache identity of a request: path plus query string,
/// case-sensitive.
pub fn request_cache_key(uri: &Uri) -> String {
    match uri.query() {
        Some(query) => format!("{}?{}", uri.path(), query),
        None => uri.path().to_string(),
    }
}

/// Cache key for per-principal responses (tour and inquiry detail pass an
/// ownership check before responding, so their cached bodies must not be
/// shared across principals).
pub fn scoped_cache_key(user_id: i32, uri: &Uri) -> String {
    format!("u{}:{}", user_id, request_cache_key(uri))
}

/// Cache lookup: `Ok(Some(body))` on hit.
pub async fn read(client: &redis::Client, key: &str) -> anyhow::Result<Option<String>> {
    let hit = haven_redis::get_optional(client, key).await?;
    if hit.is_some() {
        tracing::debug!(%key, "serving response from cache");
    }
    Ok(hit)
}

/// Populates the cache after a successful GET.
pub async fn write(client: &redis::Client, key: &str, body: &str) -> anyhow::Result<()> {
    haven_redis::set::set_with_expiry(client, key, body, CACHE_TTL_SECONDS).await
}

/// Drops every key a mutation touched. Invalidation failures are logged and
/// swallowed: the rows are already changed, and stale cached reads expire
/// with the TTL anyway.
pub async fn invalidate(client: &redis::Client, keys: &[&str]) {
    if let Err(e) = haven_redis::delete::delete_multiple(client, keys).await {
        tracing::warn!(error = ?e, ?keys, "cache invalidation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_path_when_no_query() {
        let uri: Uri = "/api/v1/property/5".parse().unwrap();
        assert_eq!(request_cache_key(&uri), "/api/v1/property/5");
    }

    #[test]
    fn key_includes_query_string() {
        let uri: Uri = "/api/v1/property?status=rent&page=2".parse().unwrap();
        assert_eq!(
            request_cache_key(&uri),
            "/api/v1/property?status=rent&page=2"
        );
    }

    #[test]
    fn scoped_key_prefixes_principal() {
        let uri: Uri = "/api/v1/tour/9".parse().unwrap();
        assert_eq!(scoped_cache_key(7, &uri), "u7:/api/v1/tour/9");
    }
}
