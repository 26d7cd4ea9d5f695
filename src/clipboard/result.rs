//! Clipboard copy outcome types.

/// External program used to reach the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
}

impl CopyMethod {
    /// Program name as invoked on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CopyMethod::Pbcopy => "pbcopy",
            CopyMethod::WlCopy => "wl-copy",
            CopyMethod::Xclip => "xclip",
            CopyMethod::Xsel => "xsel",
        }
    }
}

/// A successful clipboard write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    /// Tool that accepted the text
    pub tool: CopyMethod,
    /// Size of the copied text in bytes
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// User-facing confirmation line.
    pub fn message(&self) -> String {
        let unit = if self.size_bytes == 1 { "byte" } else { "bytes" };
        format!(
            "Copied {} {} to clipboard (via {})",
            self.size_bytes,
            unit,
            self.tool.name()
        )
    }
}
