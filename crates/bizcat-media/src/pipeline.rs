//! Resolves product images to hosted URLs, uploading only what is needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::join_all;
use reqwest::Client;
use sha2::{Digest, Sha256};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use bizcat_core::{BusinessConfig, ImageRef, ProductInput};

use crate::error::MediaError;
use crate::hosted::is_hosted_media_url;
use crate::source::ImageSource;
use crate::upload::{MediaType, MediaUploadOptions, MediaUploader};

/// Settings and the shared download client for [`resolve_images`].
///
/// Build once with [`ResolveOptions::new`] and reuse it: clones share the
/// same connection pool.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub media_host_suffix: String,
    pub upload_timeout: Duration,
    pub temp_dir: PathBuf,
    http: Client,
}

impl ResolveOptions {
    /// Derives the options from `config` and builds the client used to fetch
    /// non-hosted image URLs.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Download`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &BusinessConfig) -> Result<Self, MediaError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.download_timeout_secs))
            .build()?;

        Ok(Self {
            media_host_suffix: config.media_host_suffix.clone(),
            upload_timeout: Duration::from_millis(config.upload_timeout_ms),
            temp_dir: config.temp_dir.clone(),
            http,
        })
    }
}

/// Resolves every image to a hosted URL, preserving input order.
///
/// URLs already on the media domain are returned verbatim with no hashing or
/// upload. Every other image is uploaded concurrently with the rest. The
/// call completes only after every per-image task has finished and cleaned
/// up its temp file; if any task failed, the first failure in input order is
/// returned and no URLs are.
///
/// # Errors
///
/// Returns [`MediaError`] if any image cannot be read, downloaded, written to
/// its temp file, or uploaded.
pub async fn resolve_images<U>(
    images: &[ImageRef],
    uploader: &U,
    options: &ResolveOptions,
) -> Result<Vec<String>, MediaError>
where
    U: MediaUploader + ?Sized,
{
    let tasks = images
        .iter()
        .map(|image| resolve_one(image, uploader, options));
    let results = join_all(tasks).await;

    let urls = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(images = urls.len(), "resolved product images");
    Ok(urls)
}

/// Runs [`resolve_images`] over a product's images and replaces them with
/// their hosted URLs in place.
///
/// # Errors
///
/// Propagates any [`MediaError`] from [`resolve_images`]; the product's
/// images are left untouched on failure.
pub async fn resolve_product_images<P, U>(
    product: &mut P,
    uploader: &U,
    options: &ResolveOptions,
) -> Result<(), MediaError>
where
    P: ProductInput + ?Sized,
    U: MediaUploader + ?Sized,
{
    if product.images_mut().is_empty() {
        return Ok(());
    }
    let urls = resolve_images(product.images_mut(), uploader, options).await?;
    *product.images_mut() = urls.into_iter().map(ImageRef::Url).collect();
    Ok(())
}

async fn resolve_one<U>(
    image: &ImageRef,
    uploader: &U,
    options: &ResolveOptions,
) -> Result<String, MediaError>
where
    U: MediaUploader + ?Sized,
{
    if let Some(url) = image.url() {
        if is_hosted_media_url(url, &options.media_host_suffix) {
            tracing::debug!(url, "image already hosted, skipping upload");
            return Ok(url.to_string());
        }
    }

    let mut source = ImageSource::open(image, &options.http).await?;
    let temp_path = options.temp_dir.join(temp_file_name());

    let result = hash_and_upload(&mut source, &temp_path, uploader, options).await;

    if let Err(e) = tokio::fs::remove_file(&temp_path).await {
        tracing::warn!(
            path = %temp_path.display(),
            error = %e,
            "failed to delete temp image file"
        );
    }

    result
}

/// Unique per task; concurrent uploads share one temp directory.
fn temp_file_name() -> String {
    format!("img{}", Uuid::new_v4().simple().to_string().to_uppercase())
}

async fn hash_and_upload<U>(
    source: &mut ImageSource<'_>,
    temp_path: &Path,
    uploader: &U,
    options: &ResolveOptions,
) -> Result<String, MediaError>
where
    U: MediaUploader + ?Sized,
{
    let mut hasher = Sha256::new();
    let mut file = tokio::fs::File::create(temp_path)
        .await
        .map_err(|e| MediaError::io(temp_path, e))?;

    let mut size = 0usize;
    while let Some(chunk) = source.next_chunk().await? {
        hasher.update(&chunk);
        file.write_all(&chunk)
            .await
            .map_err(|e| MediaError::io(temp_path, e))?;
        size += chunk.len();
    }
    file.flush()
        .await
        .map_err(|e| MediaError::io(temp_path, e))?;
    drop(file);

    let sha = STANDARD.encode(hasher.finalize());
    tracing::debug!(path = %temp_path.display(), size, sha256 = %sha, "uploading product image");

    let upload_options = MediaUploadOptions {
        media_type: MediaType::ProductCatalogImage,
        file_enc_sha256_b64: sha,
        timeout: options.upload_timeout,
    };
    let uploaded = uploader
        .upload_to_server(temp_path, &upload_options)
        .await
        .map_err(MediaError::Upload)?;

    Ok(uploader.url_from_direct_path(&uploaded.direct_path))
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
