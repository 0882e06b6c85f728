use async_trait::async_trait;
use bizcat_core::{BinaryNode, BoxError};

/// Request/response round-trip owned by the connection layer.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `node` and returns the remote's reply.
    ///
    /// # Errors
    ///
    /// Network failures and remote rejections are returned opaquely; the
    /// client does not interpret them.
    async fn query(&self, node: BinaryNode) -> Result<BinaryNode, BoxError>;
}

