//! CLI definitions for spacer
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::normalize::TransformOptions;

/// Build clap styles.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string, with the git commit for dev builds.
pub fn version() -> &'static str {
    static VERSION: LazyLock<String> = LazyLock::new(|| {
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if !cfg!(feature = "release") => {
                format!("{} ({})", env!("CARGO_PKG_VERSION"), sha)
            }
            _ => env!("CARGO_PKG_VERSION").to_string(),
        }
    });
    VERSION.as_str()
}

#[derive(Parser)]
#[command(name = "spacer")]
#[command(about = "[ spacer ] - tidy up mixed Chinese/Japanese and English text")]
#[command(
    long_about = "spacer - normalize mixed CJK/Latin text.

Three stages run in a fixed order, each one can be switched on or off:
    1. full-width to half-width    Ａ１！ -> A1!
    2. auto-spacing                你好World -> 你好 World
    3. empty-line removal          drops blank and whitespace-only lines

QUICK START:
    echo '你好World' | spacer format          Auto-space stdin
    spacer format notes.md -o notes.md        Rewrite a file
    spacer format --full-to-half --copy a.txt Normalize and copy to clipboard
    spacer config show                        Show defaults from config.toml"
)]
#[command(version = version())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv); SPACER_LOG overrides"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize text from a file or stdin
    #[command(
        visible_alias = "fmt",
        long_about = "Normalize text from a file or stdin and write the result.

Stage defaults come from ~/.config/spacer/config.toml ([transform] section).
Flags override the file; when both flags of a pair are given, the last wins.
The result is written exactly as produced, without adding a trailing newline.

EXAMPLES:
    spacer format draft.md                     Print normalized draft.md
    cat draft.md | spacer format               Read from stdin
    spacer format draft.md -o draft.md         Rewrite in place
    spacer format --no-auto-space --full-to-half draft.md
    spacer format --clear-empty-lines --copy draft.md"
    )]
    Format {
        /// Input file; stdin when omitted or '-'
        #[arg(help = "Input file (reads stdin when omitted or '-')")]
        file: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(long, short, help = "Write the result to this file instead of stdout")]
        output: Option<PathBuf>,

        #[command(flatten)]
        stages: StageFlags,

        /// Also copy the result to the clipboard
        #[arg(long, overrides_with = "no_copy", help = "Also copy the result to the clipboard")]
        copy: bool,

        /// Do not copy, even if the config says so
        #[arg(long, overrides_with = "copy", help = "Do not copy to the clipboard")]
        no_copy: bool,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the spacer configuration file.

Configuration is stored in ~/.config/spacer/config.toml.

EXAMPLES:
    spacer config show       Display current configuration
    spacer config path       Print the config file location
    spacer config edit       Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLE:
    spacer completions --shell zsh > ~/.zfunc/_spacer")]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

/// Per-stage on/off flags for `spacer format`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StageFlags {
    #[arg(long, overrides_with = "no_auto_space", help = "Insert spaces between CJK and Latin text")]
    pub auto_space: bool,
    #[arg(long, overrides_with = "auto_space", help = "Do not insert spaces")]
    pub no_auto_space: bool,

    #[arg(long, overrides_with = "keep_empty_lines", help = "Remove blank lines")]
    pub clear_empty_lines: bool,
    #[arg(long, overrides_with = "clear_empty_lines", help = "Keep blank lines")]
    pub keep_empty_lines: bool,

    #[arg(long, overrides_with = "keep_full_width", help = "Convert full-width characters to half-width")]
    pub full_to_half: bool,
    #[arg(long, overrides_with = "full_to_half", help = "Leave full-width characters alone")]
    pub keep_full_width: bool,
}

impl StageFlags {
    /// Apply explicit flags on top of `base` (usually the config defaults).
    pub fn apply(&self, base: TransformOptions) -> TransformOptions {
        TransformOptions {
            auto_space: flag_pair(self.auto_space, self.no_auto_space).unwrap_or(base.auto_space),
            clear_empty_lines: flag_pair(self.clear_empty_lines, self.keep_empty_lines)
                .unwrap_or(base.clear_empty_lines),
            full_to_half: flag_pair(self.full_to_half, self.keep_full_width)
                .unwrap_or(base.full_to_half),
        }
    }
}

/// Collapse an `--x` / `--no-x` pair into an optional override.
pub fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as annotated TOML
    #[command(long_about = "Display the current configuration in TOML format.

Each known option is preceded by a comment describing it. Defaults are
shown when no config file exists yet.

EXAMPLE:
    spacer config show")]
    Show,
    /// Print the configuration file path
    Path,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in $EDITOR (default: vi).

The file is created with default settings if it does not exist.

EXAMPLE:
    EDITOR=nano spacer config edit")]
    Edit,
}
