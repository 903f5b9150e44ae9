use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wspurge",
    version,
    about = "Purges superfluous whitespace from tracked files"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output a machine-readable JSON report")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "REGEX",
        help = "Only consider paths matching this pattern (repeatable, replaces the default whitelist)"
    )]
    pub only: Vec<String>,
    #[arg(
        long,
        global = true,
        value_name = "REGEX",
        help = "Skip paths matching this pattern (repeatable, replaces the default blacklist)"
    )]
    pub skip: Vec<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whitespace violations without modifying any file.
    Validate {
        /// Explicit files to check; defaults to files changed against HEAD.
        paths: Vec<PathBuf>,
        #[arg(long, default_value_t = false, help = "Check every tracked file")]
        all: bool,
        #[arg(
            long,
            default_value_t = false,
            help = "Rewrite violating files in place instead of failing"
        )]
        auto_fix: bool,
    },
    /// Report violations and rewrite violating files in place.
    Fix {
        /// Explicit files to fix; defaults to files changed against HEAD.
        paths: Vec<PathBuf>,
        #[arg(long, default_value_t = false, help = "Fix every tracked file")]
        all: bool,
    },
}
