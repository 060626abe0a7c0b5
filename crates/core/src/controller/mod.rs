//! Upload/detect controller.
//!
//! A small state machine that owns the selected video and its preview
//! reference, submits the video through a `DetectionTransport`, and maps the
//! outcome into display state. Frontends drive it with explicit calls:
//! - `select_file` when the user picks a file
//! - `begin_detection` / `complete_detection` around a request, or `detect`
//!   to do both with a transport in one step
//! - `clear` on teardown
//!
//! At most one submission is in flight. Transitions happen only in response
//! to these calls, never on their own.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::label::slug_to_label;
use crate::media::{MediaFile, PreviewRef, PreviewRegistry};
use crate::transport::{DetectionResponse, DetectionTransport, TransportError};

/// Fixed user-facing message for any failed submission.
pub const DETECTION_FAILED_MESSAGE: &str = "Failed to process video. Please try again.";

/// Raised when a selected file cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a valid video file")]
    NotAVideo { mime: String },
}

/// Observable controller state, derived from selection and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    NoFile,
    FileSelected,
    Submitting,
    ResultReady,
    SubmissionFailed,
}

impl ControllerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerState::NoFile => "no_file",
            ControllerState::FileSelected => "file_selected",
            ControllerState::Submitting => "submitting",
            ControllerState::ResultReady => "result_ready",
            ControllerState::SubmissionFailed => "submission_failed",
        }
    }
}

/// Result of the most recent detection request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetectionOutcome {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

/// Ticket for one in-flight submission.
///
/// Returned by `begin_detection`; hand it back to `complete_detection` along
/// with the transport result.
#[derive(Debug)]
pub struct Submission {
    id: u64,
    media: MediaFile,
}

impl Submission {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The file captured when the submission started.
    pub fn media(&self) -> &MediaFile {
        &self.media
    }
}

/// A selected video together with the preview reference derived from it.
#[derive(Debug)]
struct SelectedMedia {
    media: MediaFile,
    preview: PreviewRef,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: u64,
    /// The file was replaced after the request went out.
    superseded: bool,
}

/// Client-side controller for one upload/detect session.
#[derive(Debug)]
pub struct Controller {
    registry: PreviewRegistry,
    selected: Option<SelectedMedia>,
    outcome: DetectionOutcome,
    validation_error: Option<String>,
    in_flight: Option<InFlight>,
    next_submission: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::with_registry(PreviewRegistry::new())
    }

    /// Build a controller that issues previews from a shared registry.
    pub fn with_registry(registry: PreviewRegistry) -> Self {
        Self {
            registry,
            selected: None,
            outcome: DetectionOutcome::Idle,
            validation_error: None,
            in_flight: None,
            next_submission: 1,
        }
    }

    /// Select a file for detection.
    ///
    /// Non-video files are rejected: the error is surfaced through `error()`
    /// and nothing else changes. A valid video replaces the current one,
    /// revoking its preview and clearing any previous result or error.
    pub fn select_file(&mut self, media: MediaFile) -> Result<(), ValidationError> {
        if !media.is_video() {
            let err = ValidationError::NotAVideo { mime: media.mime().to_string() };
            warn!(file = media.name(), mime = media.mime(), "rejected non-video file");
            self.validation_error = Some(err.to_string());
            return Err(err);
        }

        let preview = self.registry.create(&media);
        debug!(file = media.name(), mime = media.mime(), bytes = media.len(), "selected video");
        // Assigning drops the previous selection, which revokes its preview.
        self.selected = Some(SelectedMedia { media, preview });
        self.validation_error = None;

        match self.in_flight.as_mut() {
            Some(flight) => flight.superseded = true,
            None => self.outcome = DetectionOutcome::Idle,
        }
        Ok(())
    }

    /// Start a submission for the selected file.
    ///
    /// Returns `None` without touching state when no file is selected or a
    /// submission is already in flight.
    pub fn begin_detection(&mut self) -> Option<Submission> {
        if self.in_flight.is_some() {
            debug!("detection already in flight; ignoring trigger");
            return None;
        }
        let media = match &self.selected {
            Some(selected) => selected.media.clone(),
            None => {
                debug!("no file selected; ignoring trigger");
                return None;
            }
        };

        let id = self.next_submission;
        self.next_submission += 1;
        self.in_flight = Some(InFlight { id, superseded: false });
        self.outcome = DetectionOutcome::Pending;
        self.validation_error = None;
        info!(submission = id, file = media.name(), "submitting video for detection");
        Some(Submission { id, media })
    }

    /// Apply the result of a submission.
    ///
    /// Returns whether the result was applied. Tickets that are not the
    /// current in-flight submission are ignored. If the file was replaced
    /// while the request was out, the result is dropped and the controller
    /// returns to `FileSelected` for the new file.
    pub fn complete_detection(
        &mut self,
        submission: Submission,
        result: Result<DetectionResponse, TransportError>,
    ) -> bool {
        let flight = match self.in_flight {
            Some(flight) if flight.id == submission.id => flight,
            _ => {
                debug!(submission = submission.id, "ignoring stale detection result");
                return false;
            }
        };
        self.in_flight = None;

        if flight.superseded {
            debug!(submission = flight.id, "file replaced during detection; dropping result");
            self.outcome = DetectionOutcome::Idle;
            return false;
        }

        self.outcome = match result {
            Ok(response) => {
                info!(submission = flight.id, result = %response.result, "detection succeeded");
                DetectionOutcome::Succeeded(response.result)
            }
            Err(err) => {
                warn!(submission = flight.id, error = %err, "detection failed");
                DetectionOutcome::Failed(DETECTION_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    /// Submit the selected file through `transport` and apply the outcome.
    ///
    /// Returns `false` when the trigger was a no-op (no file, or already
    /// submitting). No timeout is applied here; a transport that never
    /// resolves keeps the controller in `Submitting`.
    pub async fn detect<T>(&mut self, transport: &T) -> bool
    where
        T: DetectionTransport + ?Sized,
    {
        let Some(submission) = self.begin_detection() else {
            return false;
        };
        debug!(submission = submission.id, transport = transport.name(), "awaiting transport");
        let result = transport.detect(submission.media()).await;
        self.complete_detection(submission, result);
        true
    }

    /// Drop the selection and reset to `NoFile`.
    ///
    /// Any in-flight submission is forgotten; its result will be ignored.
    pub fn clear(&mut self) {
        self.selected = None;
        self.outcome = DetectionOutcome::Idle;
        self.validation_error = None;
        self.in_flight = None;
    }

    pub fn state(&self) -> ControllerState {
        match (&self.outcome, &self.selected) {
            (DetectionOutcome::Pending, _) => ControllerState::Submitting,
            (_, None) => ControllerState::NoFile,
            (DetectionOutcome::Idle, Some(_)) => ControllerState::FileSelected,
            (DetectionOutcome::Succeeded(_), Some(_)) => ControllerState::ResultReady,
            (DetectionOutcome::Failed(_), Some(_)) => ControllerState::SubmissionFailed,
        }
    }

    pub fn outcome(&self) -> &DetectionOutcome {
        &self.outcome
    }

    pub fn selected(&self) -> Option<&MediaFile> {
        self.selected.as_ref().map(|s| &s.media)
    }

    pub fn preview(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.preview.as_str())
    }

    pub fn registry(&self) -> &PreviewRegistry {
        &self.registry
    }

    /// Whether the detect action is enabled.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Message for the error panel: a validation error, or the generic
    /// failure message after a failed submission.
    pub fn error(&self) -> Option<&str> {
        if let Some(msg) = &self.validation_error {
            return Some(msg.as_str());
        }
        match &self.outcome {
            DetectionOutcome::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Raw `result` from the last successful detection.
    pub fn result(&self) -> Option<&str> {
        match &self.outcome {
            DetectionOutcome::Succeeded(result) => Some(result.as_str()),
            _ => None,
        }
    }

    /// Display label for the last successful detection.
    pub fn label(&self) -> Option<String> {
        self.result().map(slug_to_label)
    }
}
