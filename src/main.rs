mod cli;
mod config;
mod error;
mod loc;
mod logging;
mod profile;
mod report_helpers;
mod walk;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;

use cli::Cli;
use config::Config;
use error::{Result, SlocError};
use loc::LocOptions;
use profile::Profile;
use walk::{ExcludeFilter, WalkOptions};

/// Merge command-line flags over the configuration file.
fn loc_options(cli: &Cli, config: &Config) -> Result<LocOptions> {
    let marker = if cli.no_marker {
        None
    } else {
        cli.marker
            .clone()
            .or_else(|| config.marker_name().map(str::to_string))
    };
    let patterns: Vec<String> = config
        .exclude
        .iter()
        .chain(&cli.exclude)
        .cloned()
        .collect();

    Ok(LocOptions {
        roots: cli.roots(),
        json: cli.json || config.json,
        walk: WalkOptions {
            marker,
            exclude: ExcludeFilter::new(&patterns)?,
        },
    })
}

fn run(cli: &Cli) -> Result<()> {
    let config = if cli.no_config {
        Config::default()
    } else {
        Config::discover(cli.config.as_deref(), &std::env::current_dir()?)?
    };
    let opts = loc_options(cli, &config)?;

    let profile_out: Option<(PathBuf, File)> = match &cli.cpuprofile {
        Some(path) => {
            let file = File::create(path).map_err(|source| SlocError::ProfileWrite {
                path: path.clone(),
                source,
            })?;
            Some((path.clone(), file))
        }
        None => None,
    };

    let mut profile = Profile::default();
    loc::run(&opts, &mut profile)?;

    if let Some((path, file)) = profile_out {
        profile.write_to(file)?;
        tracing::info!(path = %path.display(), "profile written");
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return;
    }

    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
