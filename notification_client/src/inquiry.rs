use serde::Serialize;

use crate::{NotificationClient, NotificationError};

/// Everything the notification service needs to mail a property owner
/// about a new inquiry.
#[derive(Serialize, Debug, Clone)]
pub struct InquiryNotice {
    /// Owner's first name.
    pub user_name: String,
    /// Listing reference code.
    pub reference: String,
    /// Owner's email, the recipient.
    pub email: String,
    /// Listing title.
    pub title: String,
    /// Customer's email.
    pub c_email: String,
    pub message: String,
    pub phone: String,
    pub customer_name: String,
}

impl NotificationClient {
    /// Notifies a property owner about a new inquiry.
    #[tracing::instrument(skip(self, notice), fields(reference = %notice.reference))]
    pub async fn send_inquiry_notice(
        &self,
        notice: &InquiryNotice,
    ) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(format!("{}/api/v1/notification/inquiry", self.url))
            .json(notice)
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
