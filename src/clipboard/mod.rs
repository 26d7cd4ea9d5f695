//! Clipboard support for formatted output.
//!
//! Text is handed to an external clipboard program: `pbcopy` on macOS and
//! `wl-copy`, `xclip` or `xsel` on Linux. A failed clipboard write never
//! affects the formatted text itself; callers decide how to report it.
//!
//! # Example
//!
//! ```no_run
//! use spacer::clipboard::copy::Copy;
//!
//! match Copy::new().text("你好 World") {
//!     Ok(result) => eprintln!("{}", result.message()),
//!     Err(e) => eprintln!("Warning: {}", e),
//! }
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::{ClipboardError, MAX_CONTENT_SIZE};
pub use result::{CopyMethod, CopyResult};
