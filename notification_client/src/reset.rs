use serde::Serialize;

use crate::{NotificationClient, NotificationError};

#[derive(Serialize, Debug)]
struct ResetPasswordPayload<'a> {
    email: &'a str,
    token: &'a str,
}

impl NotificationClient {
    /// Sends the password-reset email carrying the single-use token.
    #[tracing::instrument(skip(self, token))]
    pub async fn send_reset_email(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(format!("{}/api/v1/notification/reset", self.url))
            .json(&ResetPasswordPayload { email, token })
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
