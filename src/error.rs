//! Error taxonomy for the send path.

use thiserror::Error;

/// Errors surfaced by [`Client::send`](crate::Client::send).
///
/// Every failure is returned to the caller; nothing is retried and nothing
/// terminates the process. A non-2xx HTTP status is not an error at this
/// layer; it is reported through [`EventResponse::status`](crate::EventResponse).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The event payload could not be serialised to JSON.
    #[error("failed to encode event payload: {0}")]
    Encoding(#[from] serde_json::Error),
    /// No request could be constructed for the configured target URL.
    #[error("invalid request target {url}: {source}")]
    Request {
        url: String,
        source: ureq::Transport,
    },
    /// The request could not be completed over the network.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Transport),
    /// A response arrived but its body could not be read in full.
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
}
