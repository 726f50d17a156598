use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::stats::{Aggregator, FileStats};
use crate::report_helpers;

const MIN_NAME_WIDTH: usize = 12;
const TOTAL_LABEL: &str = "Total";

/// Language rows ordered by descending code lines, ties by descending name.
pub fn sorted_rows(agg: &Aggregator) -> Vec<(&str, FileStats)> {
    let mut rows: Vec<(&str, FileStats)> = agg
        .languages()
        .iter()
        .map(|(name, stats)| (name.as_str(), *stats))
        .collect();
    rows.sort_by(|a, b| b.1.code.cmp(&a.1.code).then_with(|| b.0.cmp(a.0)));
    rows
}

fn pad(name: &str, width: usize) -> String {
    let fill = width.saturating_sub(name.width());
    format!("{name}{}", " ".repeat(fill))
}

fn write_row(out: &mut impl Write, name: &str, width: usize, s: &FileStats) -> io::Result<()> {
    writeln!(
        out,
        " {} {:>8} {:>10} {:>10} {:>10} {:>10}",
        pad(name, width),
        s.files,
        s.code,
        s.comment,
        s.blank,
        s.total
    )
}

pub fn write_table(out: &mut impl Write, agg: &Aggregator) -> io::Result<()> {
    let rows = sorted_rows(agg);
    let width = rows
        .iter()
        .map(|(name, _)| name.width())
        .chain([TOTAL_LABEL.width(), MIN_NAME_WIDTH])
        .max()
        .unwrap_or(MIN_NAME_WIDTH);
    let separator = report_helpers::separator(width + 10 + 4 * 11);

    writeln!(out, "{separator}")?;
    writeln!(
        out,
        " {} {:>8} {:>10} {:>10} {:>10} {:>10}",
        pad("Language", width),
        "Files",
        "Code",
        "Comment",
        "Blank",
        "Total"
    )?;
    writeln!(out, "{separator}")?;
    for (name, stats) in &rows {
        write_row(out, name, width, stats)?;
    }
    writeln!(out, "{separator}")?;
    write_row(out, TOTAL_LABEL, width, &agg.rollup())?;
    writeln!(out, "{separator}")
}

/// Language name to counts, keys in lexicographic order. The synthetic
/// total is left out so every key is a real language.
pub fn write_json(out: &mut impl Write, agg: &Aggregator) -> io::Result<()> {
    report_helpers::write_json(out, agg.languages())
}

pub fn print_report(agg: &Aggregator) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, agg)?;
    out.flush()
}

pub fn print_json(agg: &Aggregator) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, agg)?;
    out.flush()
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
