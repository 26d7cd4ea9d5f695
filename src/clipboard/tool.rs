//! Clipboard tool abstraction.

use super::result::CopyMethod;

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The tool cannot handle this kind of copy
    NotSupported,
    /// The tool binary is not installed
    NotFound,
    /// The tool ran and failed
    Failed(String),
}

/// An external program that can put text on the system clipboard.
pub trait CopyTool {
    /// Which program this is.
    fn method(&self) -> CopyMethod;

    /// Display name, defaults to the program name.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the tool can run on this machine right now.
    fn is_available(&self) -> bool;

    /// Write `text` to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}
