//! End-to-end tests for the spacer binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A spacer command isolated from the user's config and log settings.
fn spacer(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_spacer"));
    cmd.env("HOME", home)
        .env_remove("SPACER_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(home: &Path, contents: &str) {
    let dir = home.join(".config").join("spacer");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

// ============================================================================
// format
// ============================================================================

#[test]
fn format_reads_stdin_and_spaces_by_default() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .arg("format")
        .write_stdin("你好World\n")
        .assert()
        .success()
        .stdout("你好 World\n");
}

#[test]
fn format_dash_reads_stdin() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["fmt", "-"])
        .write_stdin("Hello世界")
        .assert()
        .success()
        .stdout("Hello 世界");
}

#[test]
fn format_reads_file_argument() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("draft.md");
    fs::write(&input, "用Rust写CLI工具\n").unwrap();

    spacer(home.path())
        .arg("format")
        .arg(&input)
        .assert()
        .success()
        .stdout("用 Rust 写 CLI 工具\n");
}

#[test]
fn format_writes_output_file() {
    let home = TempDir::new().unwrap();
    let output = home.path().join("out.txt");

    spacer(home.path())
        .arg("format")
        .arg("-o")
        .arg(&output)
        .write_stdin("中a中a")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "中 a 中 a");
}

#[test]
fn format_stage_flags() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["format", "--no-auto-space", "--full-to-half", "--clear-empty-lines"])
        .write_stdin("你好ＡＢＣ\n\n　\nend\n")
        .assert()
        .success()
        .stdout("你好ABC\nend");
}

#[test]
fn format_last_flag_of_pair_wins() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["format", "--no-auto-space", "--auto-space"])
        .write_stdin("你好World")
        .assert()
        .success()
        .stdout("你好 World");
}

#[test]
fn format_uses_config_defaults() {
    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        "[transform]\nauto_space = false\nfull_to_half = true\n",
    );

    spacer(home.path())
        .arg("format")
        .write_stdin("你好ＡＢＣ")
        .assert()
        .success()
        .stdout("你好ABC");
}

#[test]
fn format_flags_override_config() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "[transform]\nauto_space = false\n");

    spacer(home.path())
        .args(["format", "--auto-space"])
        .write_stdin("你好World")
        .assert()
        .success()
        .stdout("你好 World");
}

#[test]
fn format_missing_file_fails_with_path() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["format", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn format_malformed_config_fails() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "[transform\n");

    spacer(home.path())
        .arg("format")
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn format_empty_input_gives_empty_output() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["format", "--clear-empty-lines"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[cfg(target_os = "linux")]
#[test]
fn format_copy_without_clipboard_tools_still_prints() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["format", "--copy"])
        .env("PATH", "")
        .write_stdin("你好World")
        .assert()
        .success()
        .stdout("你好 World")
        .stderr(predicate::str::contains("Warning: could not copy to clipboard"));
}

#[test]
fn format_no_copy_overrides_config() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "[clipboard]\ncopy_output = true\n");

    spacer(home.path())
        .args(["format", "--no-copy"])
        .env("PATH", "")
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("abc")
        .stderr(predicate::str::contains("clipboard").not());
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["-vv", "format"])
        .write_stdin("你好World")
        .assert()
        .success()
        .stdout("你好 World")
        .stderr(predicate::str::contains("formatting"));
}

// ============================================================================
// config / completions / version
// ============================================================================

#[test]
fn config_show_prints_annotated_defaults() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[transform]"))
        .stdout(predicate::str::contains("auto_space = true"))
        .stdout(predicate::str::contains(
            "# Insert a space between CJK and Latin characters",
        ));
}

#[test]
fn config_show_reflects_file() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "[clipboard]\ncopy_output = true\n");

    spacer(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("copy_output = true"));
}

#[test]
fn config_path_is_under_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".config").join("spacer").join("config.toml");

    spacer(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spacer"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "spacer {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn unknown_subcommand_fails() {
    let home = TempDir::new().unwrap();
    spacer(home.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}
