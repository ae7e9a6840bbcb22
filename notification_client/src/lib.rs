//! Client for the external notification service that sends transactional
//! email on our behalf (inquiry notices, account verification, password
//! resets).

mod error;
mod inquiry;
mod reset;
mod verify;

pub use error::NotificationError;
pub use inquiry::InquiryNotice;

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct NotificationClient {
    url: String,
    client: reqwest::Client,
}

impl NotificationClient {
    /// Builds a client with the service api key installed as a default
    /// header, so every call carries it.
    pub fn new(api_key: &str, url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            api_key.parse().unwrap_or_else(|_| {
                reqwest::header::HeaderValue::from_static("")
            }),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("reqwest client with static configuration");

        Self { url, client }
    }
}
