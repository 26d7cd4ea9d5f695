//! Integration tests for configuration loading and documentation.

use std::fs;

use spacer::config::docs::{annotate_config, generate_config_markdown, CONFIG_SECTIONS};
use spacer::{Config, TransformOptions};
use tempfile::TempDir;

#[test]
fn config_file_drives_transform_options() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[transform]
auto_space = false
full_to_half = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(
        config.transform,
        TransformOptions {
            auto_space: false,
            clear_empty_lines: false,
            full_to_half: true,
        }
    );
    assert!(!config.clipboard.copy_output);
}

#[test]
fn unknown_keys_are_ignored() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[transform]
clear_empty_lines = true
future_option = 3

[ui]
theme = "dark"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.transform.clear_empty_lines);
}

#[test]
fn wrong_value_type_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[transform]\nauto_space = \"yes\"\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn saved_config_is_loadable() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("spacer").join("config.toml");

    let mut config = Config::default();
    config.transform = TransformOptions::all();
    config.clipboard.copy_output = true;
    config.save_to(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[transform]"));
    assert!(contents.contains("[clipboard]"));
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn every_field_is_documented() {
    let rendered = toml::to_string_pretty(&Config::default()).unwrap();
    let annotated = annotate_config(&rendered);

    for section in CONFIG_SECTIONS {
        assert!(annotated.contains(&format!("[{}]", section.name)));
        for field in section.fields {
            let comment = format!("# {}\n{} = {}", field.description, field.name, field.default_display);
            assert!(
                annotated.contains(&comment),
                "missing annotation for {}.{}",
                section.name,
                field.name
            );
        }
    }
}

#[test]
fn annotated_config_still_parses() {
    let annotated = Config::default().to_annotated_toml().unwrap();
    let parsed: Config = toml::from_str(&annotated).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn markdown_reference_lists_all_options() {
    let md = generate_config_markdown();
    assert!(md.starts_with("<!-- This file is auto-generated"));
    for section in CONFIG_SECTIONS {
        assert!(md.contains(&format!("### [{}]", section.name)));
        for field in section.fields {
            assert!(md.contains(&format!("`{}`", field.name)));
        }
    }
}
