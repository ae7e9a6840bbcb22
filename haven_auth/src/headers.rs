use http::header::AUTHORIZATION;
use http::HeaderMap;

use crate::error::AuthError;
use crate::Result;

/// Pulls the bearer token out of the `Authorization` header.
pub fn extract_access_token_from_request_headers(headers: &HeaderMap) -> Result<String> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .ok_or(AuthError::InvalidToken)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(
            extract_access_token_from_request_headers(&headers).unwrap(),
            "abc.def.ghi"
        );
    }

    #[test]
    fn missing_header_is_reported() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_access_token_from_request_headers(&headers),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert!(extract_access_token_from_request_headers(&headers).is_err());
    }
}
