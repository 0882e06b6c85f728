use bizcat_codec::CodecError;
use bizcat_core::{BoxError, CoreError};
use bizcat_media::MediaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport query failed: {0}")]
    Transport(#[source] BoxError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("no jid given and no own jid configured")]
    MissingJid,

    #[error(transparent)]
    Core(#[from] CoreError),
}
