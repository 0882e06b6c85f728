//! Media upload pipeline for catalog product images.
//!
//! Images already hosted on the platform CDN pass through untouched. Every
//! other image is streamed once: each chunk is hashed (SHA-256) and written
//! to a uniquely named temp file, then handed to a [`MediaUploader`].

pub mod error;
pub mod hosted;
pub mod pipeline;
pub mod upload;

mod source;

pub use error::MediaError;
pub use hosted::is_hosted_media_url;
pub use pipeline::{resolve_images, resolve_product_images, ResolveOptions};
pub use upload::{
    url_from_direct_path, MediaType, MediaUploadOptions, MediaUploader, UploadedMedia,
};
