use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use uuid::Uuid;

use super::MediaFile;

const PREVIEW_SCHEME: &str = "blob:gesture/";

type PreviewTable = HashMap<String, MediaFile>;

/// Issues and resolves preview references.
///
/// Clones share the same table, so a rendering layer can hold one clone and
/// resolve the handles the controller hands out.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    entries: Arc<Mutex<PreviewTable>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `media` and return a fresh handle to it.
    pub fn create(&self, media: &MediaFile) -> PreviewRef {
        let url = format!("{PREVIEW_SCHEME}{}", Uuid::new_v4());
        self.lock().insert(url.clone(), media.clone());
        debug!(preview = %url, file = media.name(), "created preview reference");
        PreviewRef { url, registry: self.clone() }
    }

    /// Look up the media behind a live handle.
    pub fn resolve(&self, url: &str) -> Option<MediaFile> {
        self.lock().get(url).cloned()
    }

    /// Number of handles that have not been revoked yet.
    pub fn live_count(&self) -> usize {
        self.lock().len()
    }

    fn revoke(&self, url: &str) {
        if self.lock().remove(url).is_some() {
            debug!(preview = %url, "revoked preview reference");
        }
    }

    fn lock(&self) -> MutexGuard<'_, PreviewTable> {
        // The table holds no invariants a panicking holder could break.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A live preview handle. Dropping it revokes the handle.
#[derive(Debug)]
pub struct PreviewRef {
    url: String,
    registry: PreviewRegistry,
}

impl PreviewRef {
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewRef {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
    }
}
