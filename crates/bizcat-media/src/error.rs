use std::path::PathBuf;

use bizcat_core::BoxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} downloading {url}")]
    DownloadStatus { status: u16, url: String },

    #[error("media upload failed: {0}")]
    Upload(#[source] BoxError),
}

impl MediaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MediaError::Io {
            path: path.into(),
            source,
        }
    }
}
