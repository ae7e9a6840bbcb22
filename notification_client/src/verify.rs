use serde::Serialize;

use crate::{NotificationClient, NotificationError};

#[derive(Serialize, Debug)]
struct VerifyEmailPayload<'a> {
    email: &'a str,
    token: &'a str,
}

impl NotificationClient {
    /// Sends the account-verification email carrying the activation token.
    #[tracing::instrument(skip(self, token))]
    pub async fn send_verification_email(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(format!("{}/api/v1/notification/verify", self.url))
            .json(&VerifyEmailPayload { email, token })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotificationError::RequestFailed {
                status: response.status(),
            });
        }

        Ok(())
    }
}
