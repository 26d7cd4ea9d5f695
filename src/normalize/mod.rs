//! CJK/Latin text normalization.
//!
//! [`normalize`] runs up to three stages, always in this order:
//!
//! 1. [`FullWidthToHalfWidth`] - full-width ASCII variants become ASCII
//! 2. [`AutoSpacing`] - a space is inserted at CJK/Latin boundaries
//! 3. [`ClearEmptyLines`] - blank lines are dropped
//!
//! Width mapping has to run before spacing because the spacing rule only
//! recognizes half-width Latin characters.
//!
//! # Example
//!
//! ```
//! use spacer::normalize::{normalize, TransformOptions};
//!
//! let options = TransformOptions::all();
//! assert_eq!(normalize("Ａ你好１\n\nHello", &options), "A 你好 1\nHello");
//! ```

mod lines;
mod spacing;
mod transform;
mod width;

pub use lines::{is_blank_line, ClearEmptyLines};
pub use spacing::{AutoSpacing, LATIN_SYMBOLS};
pub use transform::{Transform, TransformChain};
pub use width::{to_half_width, FullWidthToHalfWidth};

use serde::{Deserialize, Serialize};

/// Which normalization stages to run.
///
/// The flags are independent; every combination is valid. Defaults match a
/// fresh spacer session: auto-spacing on, everything else off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Insert spaces between CJK and Latin characters
    #[serde(default = "default_auto_space")]
    pub auto_space: bool,
    /// Remove empty and whitespace-only lines
    #[serde(default)]
    pub clear_empty_lines: bool,
    /// Convert full-width ASCII variants to half-width
    #[serde(default)]
    pub full_to_half: bool,
}

pub fn default_auto_space() -> bool {
    true
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            auto_space: default_auto_space(),
            clear_empty_lines: false,
            full_to_half: false,
        }
    }
}

impl TransformOptions {
    /// Every stage disabled.
    pub fn none() -> Self {
        Self {
            auto_space: false,
            clear_empty_lines: false,
            full_to_half: false,
        }
    }

    /// Every stage enabled.
    pub fn all() -> Self {
        Self {
            auto_space: true,
            clear_empty_lines: true,
            full_to_half: true,
        }
    }

    /// Build the stage pipeline for these options.
    pub fn chain(&self) -> TransformChain {
        let mut chain = TransformChain::new();
        if self.full_to_half {
            chain = chain.with(FullWidthToHalfWidth);
        }
        if self.auto_space {
            chain = chain.with(AutoSpacing);
        }
        if self.clear_empty_lines {
            chain = chain.with(ClearEmptyLines);
        }
        chain
    }
}

/// Normalize `text` with the stages enabled in `options`.
///
/// Pure and total: never fails, and identical arguments always give
/// identical output.
pub fn normalize(text: &str, options: &TransformOptions) -> String {
    let mut result = text.to_string();
    options.chain().transform(&mut result);
    result
}
