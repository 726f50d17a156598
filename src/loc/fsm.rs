//! Partial-match cursor for a single comment delimiter.
//!
//! The classifier keeps one cursor per delimiter and feeds every byte of
//! the file through it exactly once. A cursor only remembers how many bytes
//! of its marker are currently matched, so its state is bounded by the
//! marker length, never by the input.

/// Outcome of feeding one byte to a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    /// The byte extended the current match without completing it.
    Partial,
    /// The byte completed the marker; the cursor is back at zero.
    Complete,
    /// The byte broke the current match. The cursor may still hold a
    /// shorter match that restarted within the bytes already seen.
    Miss,
}

#[derive(Debug, Clone)]
pub(super) struct DelimCursor {
    marker: &'static [u8],
    pos: usize,
}

impl DelimCursor {
    /// An absent marker yields a cursor that never matches.
    pub fn new(marker: Option<&'static str>) -> Self {
        Self {
            marker: marker.map_or(&[], str::as_bytes),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn feed(&mut self, b: u8) -> Step {
        if self.marker.is_empty() {
            return Step::Miss;
        }
        if self.marker[self.pos] == b {
            self.pos += 1;
            if self.pos == self.marker.len() {
                self.pos = 0;
                return Step::Complete;
            }
            return Step::Partial;
        }
        self.pos = self.fallback(b);
        Step::Miss
    }

    /// Longest marker prefix that ends with `b` and is a suffix of the bytes
    /// matched so far followed by `b`. Handles self-overlapping markers such
    /// as `-->` fed with `--->`.
    fn fallback(&self, b: u8) -> usize {
        let matched = &self.marker[..self.pos];
        (1..=self.pos)
            .rev()
            .find(|&k| {
                self.marker[k - 1] == b && self.marker[..k - 1] == matched[self.pos + 1 - k..]
            })
            .unwrap_or(0)
    }
}
