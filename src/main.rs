//! spacer - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use spacer::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    spacer::logging::init(cli.verbose);

    match cli.command {
        Commands::Format {
            file,
            output,
            stages,
            copy,
            no_copy,
        } => commands::format::handle(commands::format::FormatArgs {
            file,
            output,
            stages,
            copy: spacer::cli::flag_pair(copy, no_copy),
        }),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
