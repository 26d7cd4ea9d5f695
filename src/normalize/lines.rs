//! Empty-line removal.

use super::Transform;

/// Check whether a line counts as empty.
///
/// Whitespace-only lines are empty. Whitespace is the Unicode White_Space set
/// plus the byte-order mark, minus NEL (U+0085).
pub fn is_blank_line(line: &str) -> bool {
    line.trim_matches(is_trim_whitespace).is_empty()
}

fn is_trim_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Drops every blank line and rejoins the rest with `\n`.
///
/// Lines are split on `\n` only, so a `\r` at the end of a kept line stays
/// where it was.
pub struct ClearEmptyLines;

impl Transform for ClearEmptyLines {
    fn name(&self) -> &'static str {
        "clear_empty_lines"
    }

    fn transform(&self, text: &mut String) {
        let kept: Vec<&str> = text.split('\n').filter(|l| !is_blank_line(l)).collect();
        *text = kept.join("\n");
    }
}
