//! Image upload to the Cloudinary CDN.
//!
//! Uses unsigned uploads against a preconfigured upload preset, so the
//! service never handles the account secret. Only the returned secure URLs
//! are persisted.

mod upload;

pub use upload::UploadedImage;

#[derive(Clone)]
pub struct CloudinaryClient {
    cloud_name: String,
    upload_preset: String,
    client: reqwest::Client,
}

impl CloudinaryClient {
    pub fn new(cloud_name: &str, upload_preset: &str) -> Self {
        Self {
            cloud_name: cloud_name.to_string(),
            upload_preset: upload_preset.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}
