//! Copy orchestrator for clipboard operations.

use super::error::{ClipboardError, MAX_CONTENT_SIZE};
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard writes using the available tools.
///
/// Tools are tried in priority order; the first one that succeeds wins.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy text to the clipboard.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        if text.len() > MAX_CONTENT_SIZE {
            return Err(ClipboardError::ContentTooLarge {
                size_mb: text.len() as f64 / (1024.0 * 1024.0),
                max_mb: MAX_CONTENT_SIZE / (1024 * 1024),
            });
        }

        let mut last_error: Option<String> = None;
        for tool in &self.tools {
            if !tool.is_available() {
                tracing::debug!(tool = tool.name(), "clipboard tool unavailable");
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    tracing::debug!(tool = tool.name(), bytes = text.len(), "copied to clipboard");
                    return Ok(CopyResult::new(tool.method(), text.len()));
                }
                Err(CopyToolError::NotSupported) | Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(msg)) => {
                    tracing::warn!(tool = tool.name(), error = %msg, "clipboard tool failed, trying next");
                    last_error = Some(msg);
                }
            }
        }

        match last_error {
            Some(err) => {
                tracing::warn!(last_error = %err, "all clipboard tools failed");
                Err(ClipboardError::AllToolsFailed(err))
            }
            None => Err(ClipboardError::NoToolAvailable),
        }
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
