//! Clipboard operation errors.

/// Maximum text size accepted for a clipboard write (10 MB).
pub const MAX_CONTENT_SIZE: usize = 10 * 1024 * 1024;

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install wl-copy, xclip, or xsel.")]
    NoToolAvailable,

    #[error("Clipboard tool failed: {0}")]
    AllToolsFailed(String),

    #[error("Text too large for clipboard ({size_mb:.1} MB). Maximum is {max_mb} MB.")]
    ContentTooLarge { size_mb: f64, max_mb: usize },

    #[error("Platform not supported (only macOS and Linux)")]
    UnsupportedPlatform,
}
