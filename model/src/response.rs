use axum::{
    body::Body,
    http::{header, Response, StatusCode},
};
use utoipa::ToSchema;

/// The `{error, msg?, data?}` envelope every endpoint responds with.
#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, ToSchema)]
pub struct GenericResponse {
    /// Indicates if an error occurred
    pub error: bool,
    /// Message to explain failure or describe the outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Payload to be returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl GenericResponse {
    pub fn builder() -> Self {
        GenericResponse {
            error: false,
            msg: None,
            data: None,
        }
    }

    pub fn data<T: serde::Serialize>(mut self, data: &T) -> Self {
        self.data = serde_json::to_value(data).ok();
        self
    }

    pub fn msg(mut self, msg: &str) -> Self {
        self.msg = Some(msg.to_string());
        self
    }

    pub fn is_error(mut self, is_error: bool) -> Self {
        self.error = is_error;
        self
    }

    pub fn send(self, status_code: StatusCode) -> Response<Body> {
        let body = serde_json::to_string(&self).unwrap_or_else(|_| {
            "{\"error\":true,\"msg\":\"failed to serialize response\"}".to_string()
        });

        Response::builder()
            .status(status_code)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_skipped() {
        let json = serde_json::to_string(&GenericResponse::builder()).unwrap();
        assert_eq!(json, "{\"error\":false}");
    }

    #[test]
    fn error_envelope_carries_message() {
        let json = serde_json::to_string(
            &GenericResponse::builder()
                .is_error(true)
                .msg("Property not found"),
        )
        .unwrap();
        assert_eq!(json, "{\"error\":true,\"msg\":\"Property not found\"}");
    }

    #[test]
    fn data_is_embedded_verbatim() {
        let envelope = GenericResponse::builder().data(&serde_json::json!({"id": 5}));
        assert_eq!(envelope.data, Some(serde_json::json!({"id": 5})));
        assert!(!envelope.error);
    }
}
