//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::normalize::TransformOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default stage toggles for `spacer format`
    #[serde(default)]
    pub transform: TransformOptions,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Clipboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Copy every formatted result to the clipboard
    #[serde(default)]
    pub copy_output: bool,
}
