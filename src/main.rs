//! CLI entry point for intake.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            file,
            prompts_dir,
            format,
            provider,
            model,
        } => cmd::validate::cmd_validate(
            &file,
            prompts_dir.as_ref(),
            format,
            provider.as_deref(),
            model.as_deref(),
        ),
        Commands::Check { file, format } => cmd::check::cmd_check(&file, format),
        Commands::Extract {
            file,
            prompts_dir,
            provider,
            model,
        } => cmd::extract::cmd_extract(
            &file,
            prompts_dir.as_ref(),
            provider.as_deref(),
            model.as_deref(),
        ),
        Commands::Init { force } => cmd::init::cmd_init(force),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
    }
}
