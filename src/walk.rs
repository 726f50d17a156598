use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::{Result, SlocError};

/// Glob patterns for paths to leave out, matched relative to the walk root.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    set: GlobSet,
}

impl ExcludeFilter {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| SlocError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| SlocError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })?;
        Ok(Self { set })
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn excludes(&self, path: &Path, root: &Path) -> bool {
        let rel = path.strip_prefix(root).unwrap_or(path);
        self.set.is_match(rel)
    }
}

/// Traversal settings shared by every root.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Name of the file that marks a directory as excluded.
    pub marker: Option<String>,
    pub exclude: ExcludeFilter,
}

fn has_marker(dir: &Path, marker: Option<&str>) -> bool {
    marker.is_some_and(|name| dir.join(name).exists())
}

/// Collect candidate files under every root, in traversal order.
///
/// Dot-prefixed entries below a root are skipped, as are directories
/// holding the exclusion marker and paths matched by the exclude globs.
/// VCS ignore files are not consulted. Errors for individual roots or
/// directories go to `on_error` and the walk carries on.
pub fn discover(
    roots: &[PathBuf],
    opts: &WalkOptions,
    mut on_error: impl FnMut(SlocError),
) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for root in roots {
        let meta = match fs::metadata(root) {
            Ok(m) => m,
            Err(source) => {
                on_error(SlocError::PathStat {
                    path: root.clone(),
                    source,
                });
                continue;
            }
        };

        if meta.is_file() {
            files.push(root.clone());
            continue;
        }
        if !meta.is_dir() {
            tracing::debug!(path = %root.display(), "skipping non-regular root");
            continue;
        }
        if has_marker(root, opts.marker.as_deref()) {
            tracing::debug!(path = %root.display(), "root holds exclusion marker");
            continue;
        }

        for entry in walk(root, opts) {
            let entry = match entry {
                Ok(e) => e,
                Err(source) => {
                    on_error(SlocError::DirRead {
                        root: root.clone(),
                        source,
                    });
                    continue;
                }
            };
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                files.push(entry.into_path());
            }
        }
    }

    files
}

/// Build a plain directory walker: hidden entries skipped, no ignore files,
/// no symlink following, children sorted by name.
pub fn walk(root: &Path, opts: &WalkOptions) -> ignore::Walk {
    let marker = opts.marker.clone();
    let exclude = opts.exclude.clone();
    let base = root.to_path_buf();

    WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !exclude.is_empty() && exclude.excludes(entry.path(), &base) {
                tracing::debug!(path = %entry.path().display(), "excluded by pattern");
                return false;
            }
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && has_marker(entry.path(), marker.as_deref())
            {
                tracing::debug!(path = %entry.path().display(), "exclusion marker found");
                return false;
            }
            true
        })
        .build()
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
