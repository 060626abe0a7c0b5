//! Transport to the remote gesture-detection endpoint.
//!
//! The controller only depends on the `DetectionTransport` trait; the HTTP
//! implementation lives in `http` and tests can supply their own.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::MediaFile;

pub use http::HttpTransport;

/// Success payload from the detection endpoint.
///
/// Only `result` is read; any other fields in the body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub result: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build detection client: {0}")]
    Client(String),
    #[error("Failed to build detection request: {0}")]
    Request(String),
    #[error("Detection request failed: {0}")]
    Network(String),
    #[error("Detection endpoint returned HTTP {0}")]
    Status(u16),
    #[error("Malformed detection response: {0}")]
    MalformedResponse(String),
}

/// Sends a video to a detection service.
#[async_trait]
pub trait DetectionTransport: Send + Sync {
    async fn detect(&self, media: &MediaFile) -> Result<DetectionResponse, TransportError>;
    fn name(&self) -> &'static str;
}
