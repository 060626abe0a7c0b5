//! gesture-core
//!
//! Core library for the traffic gesture detection client.
//!
//! This crate defines the label formatter, the selected-media and preview
//! model, the upload/detect controller state machine, the transport that
//! talks to the remote detection endpoint, and the view projection that
//! frontends render from.
//!
//! Nothing here touches a terminal or a window: a frontend owns a
//! `Controller`, forwards user actions to it, and draws `ViewState`.

pub mod config;
pub mod controller;
pub mod label;
pub mod media;
pub mod transport;
pub mod view;

pub use config::{ConfigError, DetectorConfig};
pub use controller::{
    Controller, ControllerState, DetectionOutcome, Submission, ValidationError,
    DETECTION_FAILED_MESSAGE,
};
pub use label::slug_to_label;
pub use media::{MediaError, MediaFile, PreviewRef, PreviewRegistry};
pub use transport::{DetectionResponse, DetectionTransport, HttpTransport, TransportError};
pub use view::ViewState;

/// Crate version, printed by frontends in their about/version output.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
