//! Main entry point for the tex-tool CLI

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{Generator, generate};
use std::io;

use tex_tool::cli::{Cli, Commands, ConvertArgs};
use tex_tool::commands;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set verbosity
    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if cli.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }

    // Execute command
    match cli.command {
        Some(Commands::Convert(args)) => commands::convert::execute(&args, cli.quiet),

        Some(Commands::Info { file }) => commands::info::execute(&file),

        Some(Commands::Completions { shell }) => {
            print_completions(shell, &mut Cli::command());
            Ok(())
        }

        None if cli.paths.is_empty() => {
            Cli::command().print_help()?;
            Ok(())
        }

        None => commands::convert::execute(&ConvertArgs::from_paths(cli.paths), cli.quiet),
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
