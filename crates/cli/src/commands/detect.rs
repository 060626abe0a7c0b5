use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use gesture_core::{
    Controller, DetectionTransport, DetectorConfig, HttpTransport, MediaFile, ViewState,
};

use crate::commands::print_view;
use crate::sha256_bytes;

/// Summary of one detect run, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct DetectReport {
    pub file: String,
    pub mime: String,
    pub sha256: String,
    #[serde(flatten)]
    pub view: ViewState,
    /// Raw slug returned by the endpoint.
    pub result: Option<String>,
    pub detected_at: Option<String>,
}

/// Select `path`, submit it through `transport`, and report the final state.
///
/// Validation and transport failures are not errors here; they show up in
/// the report's `error` field the same way the UI would show them.
pub async fn run_detection<T>(path: &Path, transport: &T) -> Result<DetectReport>
where
    T: DetectionTransport + ?Sized,
{
    let media = MediaFile::from_path(path)?;
    let sha256 = sha256_bytes(media.bytes());
    let file = media.name().to_string();
    let mime = media.mime().to_string();

    let mut controller = Controller::new();
    if controller.select_file(media).is_ok() {
        controller.detect(transport).await;
    }

    let detected_at = controller.result().map(|_| Utc::now().to_rfc3339());
    Ok(DetectReport {
        file,
        mime,
        sha256,
        view: ViewState::from_controller(&controller),
        result: controller.result().map(str::to_string),
        detected_at,
    })
}

/// Upload a video to the detection endpoint and print the detected gesture.
pub async fn detect_command(path: &str, config: &DetectorConfig, json: bool) -> Result<()> {
    let transport = HttpTransport::new(config).context("Failed to set up detection transport")?;
    debug!(endpoint = transport.endpoint(), "using detection endpoint");
    let report = run_detection(Path::new(path), &transport)
        .await
        .with_context(|| format!("Failed to run detection for {path}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("File: {} ({})", report.file, report.mime);
        println!("Endpoint: {}", transport.endpoint());
        print_view(&report.view);
    }

    match &report.view.error {
        Some(error) => Err(anyhow!("{error}")),
        None => Ok(()),
    }
}
