//! Contract with the media upload collaborator.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bizcat_core::BoxError;

/// CDN host that serves uploaded media by direct path.
pub const MEDIA_CDN_HOST: &str = "mmg.whatsapp.net";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    ProductCatalogImage,
}

impl MediaType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::ProductCatalogImage => "product-catalog-image",
        }
    }
}

/// Per-file parameters handed to [`MediaUploader::upload_to_server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUploadOptions {
    pub media_type: MediaType,
    /// Standard base64 of the SHA-256 digest of the file contents.
    pub file_enc_sha256_b64: String,
    /// Enforced by the uploader; the pipeline only passes it through.
    pub timeout: Duration,
}

/// Server-side location of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub direct_path: String,
}

/// Uploads a local file to the platform media servers.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Uploads the file at `file_path`.
    ///
    /// # Errors
    ///
    /// Any failure (network, size limit, remote rejection) is returned as an
    /// opaque error and aborts the whole image resolution.
    async fn upload_to_server(
        &self,
        file_path: &Path,
        options: &MediaUploadOptions,
    ) -> Result<UploadedMedia, BoxError>;

    /// Public URL for a direct path returned by [`Self::upload_to_server`].
    fn url_from_direct_path(&self, direct_path: &str) -> String {
        url_from_direct_path(direct_path)
    }
}

#[must_use]
pub fn url_from_direct_path(direct_path: &str) -> String {
    format!("https://{MEDIA_CDN_HOST}{direct_path}")
}
