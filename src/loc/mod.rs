mod counter;
mod fsm;
mod lang_macro;
mod language;
mod report;
mod stats;
mod syntax;

use std::path::PathBuf;
use std::time::Instant;

use crate::error::{Result, SlocError};
use crate::profile::Profile;
use crate::walk::{self, WalkOptions};

use counter::count_file;
use language::Registry;
use report::{print_json, print_report};
use stats::Aggregator;

/// Everything `run` needs, already merged from flags and config.
#[derive(Debug, Clone)]
pub struct LocOptions {
    pub roots: Vec<PathBuf>,
    pub json: bool,
    pub walk: WalkOptions,
}

/// Print a non-fatal diagnostic; the affected path is dropped from the totals.
fn report_skip(err: SlocError) {
    tracing::debug!(error = ?err, recoverable = err.is_recoverable(), "skipping");
    eprintln!("  ! {err}");
}

/// Classify every file the registry recognizes and fold the counts per language.
pub fn tally(
    files: &[PathBuf],
    registry: &Registry<'_>,
    mut on_error: impl FnMut(SlocError),
) -> Aggregator {
    let mut agg = Aggregator::new();

    for path in files {
        let Some(spec) = registry.detect(path) else {
            continue;
        };

        match count_file(path, &spec.syntax) {
            Ok(delta) => {
                tracing::debug!(
                    path = %path.display(),
                    language = spec.name,
                    code = delta.code,
                    comment = delta.comment,
                    blank = delta.blank,
                    "classified"
                );
                agg.record(spec.name, delta);
            }
            Err(source) => on_error(SlocError::FileRead {
                path: path.clone(),
                source,
            }),
        }
    }

    agg
}

pub fn run(opts: &LocOptions, profile: &mut Profile) -> Result<()> {
    let start = Instant::now();
    let registry = Registry::builtin();
    let mut agg = Aggregator::new();
    let mut candidates = 0;

    for root in &opts.roots {
        let files = profile.time("discover", || {
            walk::discover(std::slice::from_ref(root), &opts.walk, report_skip)
        });
        candidates += files.len();
        agg.merge(profile.time("classify", || tally(&files, &registry, report_skip)));
    }

    let total = agg.rollup();
    profile.record_counts(total.files, total.total);
    if agg.is_empty() {
        tracing::info!("no recognized source files");
    }
    tracing::info!(
        candidates,
        files = total.files,
        languages = agg.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scan complete"
    );

    profile.time("render", || {
        if opts.json {
            print_json(&agg)
        } else {
            print_report(&agg)
        }
    })?;

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
