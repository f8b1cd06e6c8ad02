//! Error types for mimus-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the mimus-io crate.
///
/// Only opening a corpus can fail loudly; read failures after a successful
/// open are translated into end of input at the iterator boundary.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be opened for reading.
    #[error("failed to open {}: {reason}", path.display())]
    Open {
        /// Path that could not be opened.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },
}
