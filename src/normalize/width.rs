//! Full-width to half-width mapping.

use super::Transform;

/// First code point of the full-width ASCII variant block (`！`).
pub const FULL_WIDTH_START: u32 = 0xFF01;
/// Last code point of the full-width ASCII variant block (`～`).
pub const FULL_WIDTH_END: u32 = 0xFF5E;
/// Distance between a full-width variant and its ASCII counterpart.
pub const FULL_WIDTH_OFFSET: u32 = 0xFEE0;
/// Ideographic (full-width) space.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Map a single character to its half-width form.
///
/// Characters outside the full-width ASCII block and the ideographic space
/// are returned unchanged.
pub fn to_half_width(ch: char) -> char {
    if ch == IDEOGRAPHIC_SPACE {
        return ' ';
    }
    match ch as u32 {
        code @ FULL_WIDTH_START..=FULL_WIDTH_END => {
            char::from_u32(code - FULL_WIDTH_OFFSET).unwrap_or(ch)
        }
        _ => ch,
    }
}

/// Replaces full-width ASCII variants and the ideographic space with their
/// half-width equivalents.
pub struct FullWidthToHalfWidth;

impl Transform for FullWidthToHalfWidth {
    fn name(&self) -> &'static str {
        "full_to_half"
    }

    fn transform(&self, text: &mut String) {
        if !text.chars().any(|c| to_half_width(c) != c) {
            return;
        }
        *text = text.chars().map(to_half_width).collect();
    }
}
