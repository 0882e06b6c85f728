//! Business catalog operations over an injected transport.
//!
//! Each call builds one request tree, sends it through [`Transport::query`]
//! and parses the reply. Product creates and updates resolve their images
//! through the media pipeline first. Nothing is retried.

pub mod client;
pub mod error;
pub mod transport;

pub use client::BusinessClient;
pub use error::ClientError;
pub use transport::Transport;
