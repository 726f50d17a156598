//! CLI argument definitions for the `sloc` command.
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;

/// Count source lines of code by language.
#[derive(Parser, Debug)]
#[command(name = "sloc", version, about = "Count code, comment and blank lines by language")]
pub struct Cli {
    /// Files or directories to analyze (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Write a JSON timing profile of the run to FILE
    #[arg(long, value_name = "FILE")]
    pub cpuprofile: Option<PathBuf>,

    /// Read settings from FILE instead of ./.sloc.toml
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore any configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Skip directories containing a file with this name (default: .nosloc)
    #[arg(long, value_name = "NAME", conflicts_with = "no_marker")]
    pub marker: Option<String>,

    /// Do not skip directories on account of an exclusion marker
    #[arg(long)]
    pub no_marker: bool,

    /// Glob of paths to exclude, relative to each root (repeatable)
    #[arg(short, long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Roots to scan, defaulting to the current directory.
    pub fn roots(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}
