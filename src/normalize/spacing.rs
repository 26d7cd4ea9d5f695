//! CJK/Latin auto-spacing.
//!
//! A space is inserted between a CJK character and an adjacent Latin letter,
//! digit or ASCII symbol. Two global passes run back to back: CJK followed by
//! Latin, then Latin followed by CJK. Each pass only looks at one character on
//! either side of the boundary, and pairs already separated by whitespace
//! never match.

use std::sync::LazyLock;

use regex::Regex;

use super::Transform;

/// Hiragana/Katakana and the CJK Unified Ideographs range used for spacing.
const CJK_CLASS: &str = r"[\x{3040}-\x{30FF}\x{4E00}-\x{9FA5}]";

/// ASCII symbols treated as the Latin side of a boundary.
pub const LATIN_SYMBOLS: &str = "`~!@#$%^&*()_+-={}|[]\\:\";'<>?,./";

fn latin_class() -> String {
    format!("[a-zA-Z0-9{}]", regex::escape(LATIN_SYMBOLS))
}

static CJK_THEN_LATIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({})({})", CJK_CLASS, latin_class())).expect("valid spacing pattern")
});

static LATIN_THEN_CJK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({})({})", latin_class(), CJK_CLASS)).expect("valid spacing pattern")
});

/// Inserts a single space at CJK/Latin boundaries.
pub struct AutoSpacing;

impl Transform for AutoSpacing {
    fn name(&self) -> &'static str {
        "auto_space"
    }

    fn transform(&self, text: &mut String) {
        let spaced = CJK_THEN_LATIN.replace_all(text.as_str(), "${1} ${2}");
        let spaced = LATIN_THEN_CJK.replace_all(&spaced, "${1} ${2}").into_owned();
        *text = spaced;
    }
}
