use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use super::{DetectionResponse, DetectionTransport, TransportError};
use crate::config::DetectorConfig;
use crate::media::MediaFile;

/// Posts the video as a single multipart field and parses the JSON reply.
///
/// No retries. A timeout is only applied when the config sets one.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    field_name: String,
}

impl HttpTransport {
    pub fn new(config: &DetectorConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DetectionTransport for HttpTransport {
    async fn detect(&self, media: &MediaFile) -> Result<DetectionResponse, TransportError> {
        let part = Part::bytes(media.bytes().to_vec())
            .file_name(media.name().to_string())
            .mime_str(media.mime())
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let form = Form::new().part(self.field_name.clone(), part);

        debug!(endpoint = %self.endpoint, file = media.name(), "posting detection request");
        let resp = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|e| TransportError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| TransportError::MalformedResponse(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
