//! Format command handler

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use spacer::cli::StageFlags;
use spacer::clipboard::copy::Copy;
use spacer::{normalize, Config, TransformOptions};

/// Arguments for `spacer format`, already collapsed from clap flags.
pub struct FormatArgs {
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub stages: StageFlags,
    /// Explicit `--copy`/`--no-copy`, if any
    pub copy: Option<bool>,
}

/// Resolve stage options and the copy switch.
///
/// Priority order:
/// 1. CLI flags
/// 2. Config file
/// 3. Built-in defaults (already folded into `Config::default()`)
pub fn resolve(
    config: &Config,
    stages: &StageFlags,
    copy: Option<bool>,
) -> (TransformOptions, bool) {
    let options = stages.apply(config.transform);
    let copy = copy.unwrap_or(config.clipboard.copy_output);
    (options, copy)
}

/// Normalize a file or stdin and write the result to a file or stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: FormatArgs) -> Result<()> {
    let config = Config::load()?;
    let (options, copy) = resolve(&config, &args.stages, args.copy);
    tracing::info!(
        auto_space = options.auto_space,
        clear_empty_lines = options.clear_empty_lines,
        full_to_half = options.full_to_half,
        copy,
        "formatting"
    );

    let input = read_input(args.file.as_deref())?;
    let output = normalize(&input, &options);
    tracing::debug!(input_bytes = input.len(), output_bytes = output.len(), "normalized");

    write_output(args.output.as_deref(), &output)?;

    if copy {
        eprintln!("{}", copy_output(&Copy::new(), &output));
    }

    Ok(())
}

/// Whether a FILE argument means stdin.
fn is_stdin(file: Option<&Path>) -> bool {
    file.map_or(true, |p| p == Path::new("-"))
}

/// Read the whole input from a file, or from stdin.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file.filter(|p| !is_stdin(Some(*p))) {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    if atty::is(atty::Stream::Stdin) {
        bail!("No input: pass a FILE or pipe text on stdin\nHint: echo '你好World' | spacer format");
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

/// Write the result verbatim to a file, or to stdout.
pub fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

/// Copy the result and return the line to show the user.
///
/// A clipboard failure is logged and turned into a warning; it never fails
/// the command.
pub fn copy_output(copier: &Copy, text: &str) -> String {
    match copier.text(text) {
        Ok(result) => result.message(),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            format!("Warning: could not copy to clipboard: {}", e)
        }
    }
}
