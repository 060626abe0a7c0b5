use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use gesture_core::{Controller, MediaFile, ViewState};

use crate::commands::print_view;
use crate::sha256_bytes;

/// What `inspect` found, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub file: String,
    pub mime: String,
    pub size: usize,
    pub sha256: String,
    pub accepted: bool,
    #[serde(flatten)]
    pub view: ViewState,
}

/// Load a file and show how the controller would treat it, without sending it.
pub fn inspect_file(path: &Path) -> Result<InspectReport> {
    let media = MediaFile::from_path(path)?;
    let sha256 = sha256_bytes(media.bytes());
    let file = media.name().to_string();
    let mime = media.mime().to_string();
    let size = media.len();

    let mut controller = Controller::new();
    let accepted = controller.select_file(media).is_ok();

    Ok(InspectReport {
        file,
        mime,
        size,
        sha256,
        accepted,
        view: ViewState::from_controller(&controller),
    })
}

pub fn inspect_command(path: &str, json: bool) -> Result<()> {
    let report =
        inspect_file(Path::new(path)).with_context(|| format!("Failed to inspect {path}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File: {}", report.file);
    println!("  MIME: {}", report.mime);
    println!("  Size: {} bytes", report.size);
    println!("  SHA-256: {}", report.sha256);
    println!("  Accepted: {}", if report.accepted { "yes" } else { "no" });
    print_view(&report.view);
    Ok(())
}
