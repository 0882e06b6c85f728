use thiserror::Error;

/// Opaque error surfaced by an external collaborator (transport, uploader).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid jid: {0:?}")]
    InvalidJid(String),

    #[error("invalid business hours mode: {0:?}")]
    InvalidHoursMode(String),

    #[error("business hours config is missing `{0}`")]
    MissingHoursField(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
