use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::fsm::{DelimCursor, Step};
use super::stats::FileStats;
use super::syntax::CommentSyntax;

const CHUNK_SIZE: usize = 8 * 1024;

/// Single-pass line classifier.
///
/// Bytes are fed one at a time; the state is three delimiter cursors, the
/// block nesting depth and a few per-line flags. A line that touches a
/// comment in any way counts as a comment line, otherwise it is code when it
/// holds a non-whitespace byte and blank when it does not. Every line lands
/// in exactly one category.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    nested: bool,
    line_cur: DelimCursor,
    start_cur: DelimCursor,
    end_cur: DelimCursor,
    line_marker_len: usize,
    depth: usize,
    in_line_comment: bool,
    // Line comment whose marker is still a live prefix of the block opener
    // (Lua `--` inside `--[[`).
    tentative: bool,
    comment_seen: bool,
    non_blank: bool,
    line_open: bool,
    stats: FileStats,
}

impl LineClassifier {
    pub fn new(syntax: &CommentSyntax) -> Self {
        let (start, end) = match syntax.block {
            Some((start, end)) => (Some(start), Some(end)),
            None => (None, None),
        };
        Self {
            nested: syntax.nests(),
            line_cur: DelimCursor::new(syntax.line),
            start_cur: DelimCursor::new(start),
            end_cur: DelimCursor::new(end),
            line_marker_len: syntax.line.map_or(0, str::len),
            depth: 0,
            in_line_comment: false,
            tentative: false,
            comment_seen: false,
            non_blank: false,
            line_open: false,
            stats: FileStats {
                files: 1,
                ..FileStats::default()
            },
        }
    }

    /// Current block-comment nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.step(b);
        }
    }

    fn step(&mut self, b: u8) {
        if b == b'\n' {
            self.end_line();
            return;
        }
        if !self.line_open {
            self.line_open = true;
            self.comment_seen = self.depth > 0;
        }

        let was_open = self.depth > 0;

        let mut opened = false;
        if (self.in_line_comment && !self.tentative) || (was_open && !self.nested) {
            self.start_cur.reset();
        } else {
            match self.start_cur.feed(b) {
                Step::Complete => opened = true,
                Step::Miss if self.tentative => {
                    self.tentative = false;
                    self.start_cur.reset();
                }
                _ => {}
            }
        }

        if opened {
            if self.tentative {
                self.in_line_comment = false;
                self.tentative = false;
            }
            self.depth = if self.nested { self.depth + 1 } else { 1 };
            self.end_cur.reset();
        } else if was_open && !self.in_line_comment {
            if self.end_cur.feed(b) == Step::Complete {
                self.depth -= 1;
                // The closing byte cannot also begin an opener.
                self.start_cur.reset();
            }
        } else {
            self.end_cur.reset();
        }

        if !was_open && !opened && !self.in_line_comment {
            if self.line_cur.feed(b) == Step::Complete {
                self.in_line_comment = true;
                self.tentative = self.start_cur.pos() >= self.line_marker_len;
            }
        } else {
            self.line_cur.reset();
        }

        if self.in_line_comment || self.depth > 0 || opened {
            self.comment_seen = true;
        }
        if !matches!(b, b' ' | b'\t' | b'\r') {
            self.non_blank = true;
        }
    }

    fn end_line(&mut self) {
        let comment = self.comment_seen || (!self.line_open && self.depth > 0);
        self.stats.total += 1;
        if comment {
            self.stats.comment += 1;
        } else if self.non_blank {
            self.stats.code += 1;
        } else {
            self.stats.blank += 1;
        }

        self.in_line_comment = false;
        self.tentative = false;
        self.comment_seen = false;
        self.non_blank = false;
        self.line_open = false;
        self.line_cur.reset();
        self.start_cur.reset();
        self.end_cur.reset();
    }

    /// Close the trailing line, if any bytes followed the last newline.
    pub fn finish(mut self) -> FileStats {
        if self.line_open {
            self.end_line();
        }
        self.stats
    }
}

/// Classify everything a reader yields, in fixed-size chunks.
pub fn count_reader<R: Read>(mut reader: R, syntax: &CommentSyntax) -> io::Result<FileStats> {
    let mut classifier = LineClassifier::new(syntax);
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        classifier.feed(&buf[..n]);
    }
    if classifier.depth() > 0 {
        tracing::trace!(depth = classifier.depth(), "block comment open at end of input");
    }
    Ok(classifier.finish())
}

pub fn count_file(path: &Path, syntax: &CommentSyntax) -> io::Result<FileStats> {
    let file = File::open(path)?;
    count_reader(file, syntax)
}

#[cfg(test)]
#[path = "counter_test.rs"]
mod tests;
