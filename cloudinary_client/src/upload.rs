use anyhow::Context;
use serde::Deserialize;

use crate::CloudinaryClient;

/// The slice of the upload response we care about.
#[derive(Deserialize, Debug)]
pub struct UploadedImage {
    pub secure_url: String,
}

impl CloudinaryClient {
    /// Uploads one image into the given folder and returns its secure URL.
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        folder: &str,
    ) -> anyhow::Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", folder.to_string())
            .part("file", part);

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .context("unable to reach cloudinary")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("cloudinary upload failed with {status}: {body}");
        }

        let uploaded: UploadedImage = response
            .json()
            .await
            .context("unable to parse cloudinary response")?;

        Ok(uploaded.secure_url)
    }

    /// Uploads a batch of images, preserving input order in the returned
    /// URLs. Fails the whole batch on the first error so a listing never
    /// ends up with half its gallery.
    #[tracing::instrument(skip(self, images), fields(count = images.len()))]
    pub async fn upload_images(
        &self,
        images: Vec<(String, Vec<u8>)>,
        folder: &str,
    ) -> anyhow::Result<Vec<String>> {
        let mut urls = Vec::with_capacity(images.len());
        for (file_name, bytes) in images {
            let url = self.upload_image(&file_name, bytes, folder).await?;
            urls.push(url);
        }
        Ok(urls)
    }
}
