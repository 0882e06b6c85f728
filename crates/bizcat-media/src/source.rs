//! Chunked readers over the three image sources.

use reqwest::Client;
use tokio::io::AsyncReadExt;

use bizcat_core::ImageRef;

use crate::error::MediaError;

const CHUNK_SIZE: usize = 64 * 1024;

/// A byte stream opened from an [`ImageRef`], read front to back exactly once.
pub(crate) enum ImageSource<'a> {
    Memory { bytes: &'a [u8], offset: usize },
    File {
        file: tokio::fs::File,
        path: &'a std::path::Path,
    },
    Remote(reqwest::Response),
}

impl<'a> ImageSource<'a> {
    /// Opens `image` for reading. Remote URLs are fetched with `http`.
    ///
    /// # Errors
    ///
    /// - [`MediaError::Io`] if a local file cannot be opened.
    /// - [`MediaError::Download`] / [`MediaError::DownloadStatus`] if a remote
    ///   image cannot be fetched.
    pub(crate) async fn open(image: &'a ImageRef, http: &Client) -> Result<Self, MediaError> {
        match image {
            ImageRef::Bytes(bytes) => Ok(ImageSource::Memory { bytes, offset: 0 }),
            ImageRef::File(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| MediaError::io(path, e))?;
                Ok(ImageSource::File { file, path })
            }
            ImageRef::Url(url) => {
                let response = http.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(MediaError::DownloadStatus {
                        status: status.as_u16(),
                        url: url.clone(),
                    });
                }
                Ok(ImageSource::Remote(response))
            }
        }
    }

    /// Next chunk of the stream, or `None` once exhausted.
    pub(crate) async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, MediaError> {
        match self {
            ImageSource::Memory { bytes, offset } => {
                if *offset >= bytes.len() {
                    return Ok(None);
                }
                let end = (*offset + CHUNK_SIZE).min(bytes.len());
                let chunk = bytes[*offset..end].to_vec();
                *offset = end;
                Ok(Some(chunk))
            }
            ImageSource::File { file, path } => {
                let mut buf = vec![0u8; CHUNK_SIZE];
                let n = file
                    .read(&mut buf)
                    .await
                    .map_err(|e| MediaError::io(*path, e))?;
                if n == 0 {
                    return Ok(None);
                }
                buf.truncate(n);
                Ok(Some(buf))
            }
            ImageSource::Remote(response) => Ok(response.chunk().await?.map(|b| b.to_vec())),
        }
    }
}
