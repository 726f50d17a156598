use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::Serialize;

/// Line counts for one file, or the running total of a language.
///
/// `total == code + comment + blank` holds for every value produced by the
/// classifier and is preserved by addition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileStats {
    #[serde(rename = "FileCount")]
    pub files: usize,
    #[serde(rename = "TotalLines")]
    pub total: usize,
    #[serde(rename = "CodeLines")]
    pub code: usize,
    #[serde(rename = "BlankLines")]
    pub blank: usize,
    #[serde(rename = "CommentLines")]
    pub comment: usize,
}

impl AddAssign for FileStats {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.total += other.total;
        self.code += other.code;
        self.blank += other.blank;
        self.comment += other.comment;
    }
}

/// Per-language accumulator, keyed by display name.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    by_lang: BTreeMap<String, FileStats>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's counts into its language, creating the entry on first use.
    pub fn record(&mut self, lang: &str, delta: FileStats) {
        match self.by_lang.get_mut(lang) {
            Some(stats) => *stats += delta,
            None => {
                self.by_lang.insert(lang.to_string(), delta);
            }
        }
    }

    pub fn merge(&mut self, other: Aggregator) {
        for (lang, stats) in other.by_lang {
            *self.by_lang.entry(lang).or_default() += stats;
        }
    }

    /// Sum over every language.
    pub fn rollup(&self) -> FileStats {
        let mut total = FileStats::default();
        for stats in self.by_lang.values() {
            total += *stats;
        }
        total
    }

    pub fn is_empty(&self) -> bool {
        self.by_lang.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_lang.len()
    }

    pub fn languages(&self) -> &BTreeMap<String, FileStats> {
        &self.by_lang
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
