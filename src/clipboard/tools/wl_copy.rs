//! Wayland wl-copy clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Wayland clipboard tool using `wl-copy` from wl-clipboard.
///
/// Only offered inside a Wayland session (`WAYLAND_DISPLAY` set).
pub struct WlCopy;

impl WlCopy {
    pub fn new() -> Self {
        Self
    }

    fn in_wayland_session() -> bool {
        std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty())
    }
}

impl CopyTool for WlCopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::in_wayland_session() && super::tool_exists("wl-copy")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        super::pipe_text("wl-copy", &[], text)
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
