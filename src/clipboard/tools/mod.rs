//! Platform clipboard tools.
//!
//! Each tool pipes text into an external program's stdin.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Tools for the current platform in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    if cfg!(target_os = "macos") {
        vec![Box::new(Pbcopy::new())]
    } else if cfg!(target_os = "linux") {
        vec![
            Box::new(WlCopy::new()),
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
        ]
    } else {
        Vec::new()
    }
}

/// Check if a program is on PATH.
pub(crate) fn tool_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run `program` with `args` and write `text` to its stdin.
///
/// Only the tool's own exit status is awaited. Its stdout and stderr are not
/// piped: xclip and wl-copy fork a child that keeps serving the selection
/// and would hold a pipe open until another program takes the clipboard.
pub(crate) fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        // Close the pipe so the tool sees EOF
        drop(stdin);
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} failed", program)))
    }
}
