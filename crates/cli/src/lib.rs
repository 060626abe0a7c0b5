use sha2::{Digest, Sha256};

pub mod commands;

/// Compute the SHA-256 hash of an in-memory buffer as a hex string.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Default log filter for the CLI; `--verbose` raises it to `info`.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "gesture_detect=info,gesture_core=info"
    } else {
        "gesture_detect=warn,gesture_core=warn"
    }
}
