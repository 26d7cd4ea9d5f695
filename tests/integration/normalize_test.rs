//! Integration tests for the normalize pipeline.

use spacer::normalize::{
    normalize, AutoSpacing, ClearEmptyLines, FullWidthToHalfWidth, Transform, TransformChain,
    TransformOptions,
};

fn only(auto_space: bool, clear_empty_lines: bool, full_to_half: bool) -> TransformOptions {
    TransformOptions {
        auto_space,
        clear_empty_lines,
        full_to_half,
    }
}

// =============================================================================
// Single stages
// =============================================================================

#[test]
fn auto_space_only() {
    let options = only(true, false, false);
    assert_eq!(normalize("你好World", &options), "你好 World");
    assert_eq!(normalize("Hello世界", &options), "Hello 世界");
    assert_eq!(
        normalize("用Rust写CLI工具v2版本", &options),
        "用 Rust 写 CLI 工具 v2 版本"
    );
}

#[test]
fn auto_space_handles_alternating_characters() {
    let options = only(true, false, false);
    assert_eq!(normalize("中a中a", &options), "中 a 中 a");
}

#[test]
fn auto_space_leaves_existing_spaces_alone() {
    let options = only(true, false, false);
    assert_eq!(normalize("你好 World", &options), "你好 World");
}

#[test]
fn auto_space_covers_japanese_kana() {
    let options = only(true, false, false);
    assert_eq!(normalize("カタカナABC", &options), "カタカナ ABC");
    assert_eq!(normalize("ABCひらがな", &options), "ABC ひらがな");
}

#[test]
fn auto_space_ignores_full_width_latin() {
    let options = only(true, false, false);
    assert_eq!(normalize("你好Ａ", &options), "你好Ａ");
}

#[test]
fn full_to_half_only() {
    let options = only(false, false, true);
    assert_eq!(normalize("ＡＢＣ１２３！", &options), "ABC123!");
    assert_eq!(normalize("你好　世界", &options), "你好 世界");
    assert_eq!(normalize("你好ABC", &options), "你好ABC");
}

#[test]
fn clear_empty_lines_only() {
    let options = only(false, true, false);
    assert_eq!(normalize("a\n\n  \n\t\nb", &options), "a\nb");
    assert_eq!(normalize("\n\n", &options), "");
}

#[test]
fn clear_empty_lines_drops_trailing_newline() {
    let options = only(false, true, false);
    assert_eq!(normalize("a\nb\n", &options), "a\nb");
}

// =============================================================================
// Stage interplay
// =============================================================================

#[test]
fn width_mapping_runs_before_spacing() {
    let options = only(true, false, true);
    assert_eq!(normalize("你好ＡＢＣ", &options), "你好 ABC");
}

#[test]
fn all_stages_together() {
    let input = "第一行Ｈｅｌｌｏ\n\n　\n第二行World！\n";
    let output = normalize(input, &TransformOptions::all());
    assert_eq!(output, "第一行 Hello\n第二行 World!");
}

#[test]
fn no_stages_is_identity() {
    let input = "你好World\n\nＡＢＣ　\n";
    assert_eq!(normalize(input, &TransformOptions::none()), input);
}

#[test]
fn empty_input_gives_empty_output() {
    for options in [
        TransformOptions::none(),
        TransformOptions::default(),
        TransformOptions::all(),
    ] {
        assert_eq!(normalize("", &options), "");
    }
}

#[test]
fn auto_spacing_is_idempotent() {
    let options = TransformOptions::all();
    let inputs = ["你好World", "中a中a", "用Rust写CLI工具v2版本", "Ｈｉ你好\n\n"];
    for input in inputs {
        let once = normalize(input, &options);
        assert_eq!(normalize(&once, &options), once, "input: {:?}", input);
    }
}

#[test]
fn pure_latin_text_is_untouched() {
    let input = "The quick brown fox (v1.2) jumps.";
    assert_eq!(normalize(input, &TransformOptions::all()), input);
}

// =============================================================================
// Custom chains
// =============================================================================

#[test]
fn chain_built_by_hand_matches_normalize() {
    let chain = TransformChain::new()
        .with(FullWidthToHalfWidth)
        .with(AutoSpacing)
        .with(ClearEmptyLines);

    let mut text = "Ａ你好\n\nB".to_string();
    chain.transform(&mut text);

    assert_eq!(text, normalize("Ａ你好\n\nB", &TransformOptions::all()));
}

#[test]
fn options_chain_lists_enabled_stages_in_order() {
    let chain = TransformOptions::all().chain();
    assert_eq!(chain.len(), 3);
    assert!(TransformOptions::none().chain().is_empty());
}
