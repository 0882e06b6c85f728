use std::path::PathBuf;

pub const DEFAULT_MEDIA_HOST_SUFFIX: &str = ".whatsapp.net";
pub const DEFAULT_UPLOAD_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CATALOG_PAGE_LIMIT: u32 = 10;
pub const DEFAULT_COLLECTION_LIMIT: u32 = 51;

/// Injectable settings for the catalog client and media pipeline.
///
/// Wire-protocol pins (xmlns values, `v`/`smax_id` literals, image
/// dimension hints) are constants in the codec and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Host suffix identifying images already stored on the platform CDN.
    pub media_host_suffix: String,
    /// Passed through to the upload collaborator for every image.
    pub upload_timeout_ms: u64,
    /// Directory receiving the per-image temp files.
    pub temp_dir: PathBuf,
    /// Request timeout when fetching a non-hosted image URL.
    pub download_timeout_secs: u64,
    pub catalog_page_limit: u32,
    pub collection_limit: u32,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            media_host_suffix: DEFAULT_MEDIA_HOST_SUFFIX.to_string(),
            upload_timeout_ms: DEFAULT_UPLOAD_TIMEOUT_MS,
            temp_dir: std::env::temp_dir(),
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            catalog_page_limit: DEFAULT_CATALOG_PAGE_LIMIT,
            collection_limit: DEFAULT_COLLECTION_LIMIT,
        }
    }
}
