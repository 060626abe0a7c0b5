use anyhow::{Context, Result};
use gesture_core::{DetectorConfig, ViewState};

/// Resolve the detector config: optional file first, then CLI overrides.
pub fn load_detector_config(
    config_path: Option<&str>,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<DetectorConfig> {
    let mut config = match config_path {
        Some(path) => DetectorConfig::load(path)
            .with_context(|| format!("Failed to load detector config from {path}"))?,
        None => DetectorConfig::default(),
    };
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }
    if timeout_secs.is_some() {
        config = config.with_timeout_secs(timeout_secs);
    }
    Ok(config)
}

/// Human-readable rendering of the session's view state.
pub fn print_view(view: &ViewState) {
    println!("State: {}", view.state.as_str());
    println!("Preview: {}", view.preview.as_deref().unwrap_or("-"));
    let enabled = if view.submit_enabled { "enabled" } else { "disabled" };
    println!("Submit: {} ({})", view.submit_caption, enabled);
    if let Some(gesture) = &view.detected_gesture {
        println!("Detected Gesture: {gesture}");
    }
    if let Some(error) = &view.error {
        println!("Error: {error}");
    }
}
