use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("response shape violation: <{parent}> has no <{child}> child")]
    MissingChild { parent: String, child: String },

    #[error("response shape violation: <{parent}/{child}> has no text content")]
    MissingText { parent: String, child: String },

    #[error("invalid number in <{field}>: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("product image {index} must be uploaded before building the product node")]
    ImageNotUploaded { index: usize },
}

impl CodecError {
    /// `true` when the remote response lacked a required child or its text.
    #[must_use]
    pub fn is_shape_violation(&self) -> bool {
        matches!(
            self,
            CodecError::MissingChild { .. } | CodecError::MissingText { .. }
        )
    }
}
