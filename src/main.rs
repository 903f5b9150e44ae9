use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use domain::models::Outcome;
use services::discovery::{self, FileFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("{}: {:#}", "Error".red().bold(), err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let rules = services::rules::catalog();
    let filter = FileFilter::new(&cli.only, &cli.skip)?;
    match &cli.command {
        Commands::Validate {
            paths,
            all,
            auto_fix,
        } => {
            let files = discovery::candidate_files(paths, *all, &filter)?;
            commands::handle_validate(&rules, &files, *auto_fix, cli.json)
        }
        Commands::Fix { paths, all } => {
            let files = discovery::candidate_files(paths, *all, &filter)?;
            commands::handle_fix(&rules, &files, cli.json)
        }
    }
}
