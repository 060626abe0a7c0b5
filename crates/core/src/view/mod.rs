//! Display projection of the controller.
//!
//! Frontends render from `ViewState` instead of poking at the controller, so
//! the enable/disable rules and captions live in one place.

use serde::Serialize;

use crate::controller::{Controller, ControllerState};

pub const SUBMIT_CAPTION: &str = "Detect Gestures";
pub const SUBMITTING_CAPTION: &str = "Processing...";

/// Everything a frontend needs to draw one frame of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub state: ControllerState,
    /// Preview reference for the selected video, if any.
    pub preview: Option<String>,
    pub submit_enabled: bool,
    pub submit_caption: &'static str,
    /// Contents of the error panel.
    pub error: Option<String>,
    /// Formatted label for the results panel.
    pub detected_gesture: Option<String>,
}

impl ViewState {
    pub fn from_controller(controller: &Controller) -> Self {
        let submit_caption =
            if controller.is_submitting() { SUBMITTING_CAPTION } else { SUBMIT_CAPTION };
        Self {
            state: controller.state(),
            preview: controller.preview().map(str::to_string),
            submit_enabled: controller.can_submit(),
            submit_caption,
            error: controller.error().map(str::to_string),
            detected_gesture: controller.label(),
        }
    }
}

impl From<&Controller> for ViewState {
    fn from(controller: &Controller) -> Self {
        Self::from_controller(controller)
    }
}
