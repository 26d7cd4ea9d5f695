//! Config field documentation, shared by `spacer config show` (inline
//! comments) and `cargo xtask gen-docs` (`docs/Configuration.md`).

use std::collections::HashMap;

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML section name (e.g., "transform")
    pub name: &'static str,
    /// Human-readable description of the section
    pub description: &'static str,
    /// Fields in this section
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Default value as a display string
    pub default_display: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "transform",
        description: "Stages applied by `spacer format` unless overridden by flags",
        fields: &[
            FieldDoc {
                name: "auto_space",
                description: "Insert a space between CJK and Latin characters",
                default_display: "true",
            },
            FieldDoc {
                name: "clear_empty_lines",
                description: "Remove empty and whitespace-only lines",
                default_display: "false",
            },
            FieldDoc {
                name: "full_to_half",
                description: "Convert full-width letters, digits and symbols to half-width",
                default_display: "false",
            },
        ],
    },
    SectionDoc {
        name: "clipboard",
        description: "Clipboard settings",
        fields: &[FieldDoc {
            name: "copy_output",
            description: "Also copy every formatted result to the clipboard",
            default_display: "false",
        }],
    },
];

/// Annotate a serialized TOML config string with inline documentation comments.
///
/// Each known `key = value` line gets a `# description` line above it.
/// Unknown keys and section headers are passed through untouched.
pub fn annotate_config(toml_str: &str) -> String {
    let mut lookup: HashMap<(&str, &str), &str> = HashMap::new();
    for section in CONFIG_SECTIONS {
        for field in section.fields {
            lookup.insert((section.name, field.name), field.description);
        }
    }

    let mut result = String::new();
    let mut current_section = String::new();

    for line in toml_str.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            current_section = trimmed
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
        } else if let Some((before_eq, _)) = trimmed.split_once('=') {
            let key = before_eq.trim();
            if let Some(desc) = lookup.get(&(current_section.as_str(), key)) {
                result.push_str(&format!("# {}\n", desc));
            }
        }

        result.push_str(line);
        result.push('\n');
    }

    result
}

/// Generate the configuration reference page as markdown.
pub fn generate_config_markdown() -> String {
    let mut md = String::new();

    md.push_str(
        "<!-- This file is auto-generated by `cargo xtask gen-docs`. Do not edit manually. -->\n\n",
    );
    md.push_str("# Configuration\n\n");
    md.push_str("spacer reads a TOML configuration file at `~/.config/spacer/config.toml`.\n");
    md.push_str("Command-line flags always win over the file.\n\n");
    md.push_str("## Quick Commands\n\n");
    md.push_str("```bash\n");
    md.push_str("spacer config show      # View current configuration\n");
    md.push_str("spacer config path      # Print the config file location\n");
    md.push_str("spacer config edit      # Open in your editor\n");
    md.push_str("```\n\n");
    md.push_str("## Configuration Sections\n\n");

    for section in CONFIG_SECTIONS {
        md.push_str(&format!("### [{}]\n\n", section.name));
        md.push_str(&format!("{}\n\n", section.description));
        md.push_str("| Option | Default | Description |\n");
        md.push_str("|--------|---------|-------------|\n");
        for field in section.fields {
            md.push_str(&format!(
                "| `{}` | `{}` | {} |\n",
                field.name, field.default_display, field.description
            ));
        }
        md.push('\n');
    }

    md.push_str("## Example Configuration\n\n");
    md.push_str("```toml\n");
    md.push_str("[transform]\n");
    md.push_str("auto_space = true\n");
    md.push_str("clear_empty_lines = true\n");
    md.push_str("full_to_half = true\n\n");
    md.push_str("[clipboard]\n");
    md.push_str("copy_output = false\n");
    md.push_str("```\n");

    md
}
