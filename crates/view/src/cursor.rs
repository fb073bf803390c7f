//! Page-at-a-time reveal over a result set.

use std::num::NonZeroUsize;
use std::ops::Range;

/// A slice of newly revealed results and how many are still hidden.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub remaining: usize,
}

/// Tracks how much of the current result set has been revealed.
///
/// `revealed` is always a multiple of the page size, or equal to the result
/// length once a final partial page has been shown. It never exceeds the
/// result length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: NonZeroUsize,
    revealed: usize,
}

impl PageCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size, revealed: 0 }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Hidden results left in a result set of length `len`.
    pub fn remaining(&self, len: usize) -> usize {
        len.saturating_sub(self.revealed)
    }

    /// Starts over on a fresh result set of length `len`, returning the
    /// range of the first page.
    fn reset(&mut self, len: usize) -> Range<usize> {
        self.revealed = self.page_size().min(len);
        0..self.revealed
    }

    /// Moves past the next page, returning its range. Once everything is
    /// revealed the range is empty.
    fn advance(&mut self, len: usize) -> Range<usize> {
        let start = self.revealed.min(len);
        self.revealed = start.saturating_add(self.page_size()).min(len);
        start..self.revealed
    }

    /// Starts over on `result`, revealing its first page.
    pub fn reveal_first<'a, T>(&mut self, result: &'a [T]) -> Page<'a, T> {
        let range = self.reset(result.len());
        Page { items: &result[range], remaining: self.remaining(result.len()) }
    }

    /// Reveals the page after the last one shown. Once everything is
    /// revealed the page is empty.
    pub fn reveal_more<'a, T>(&mut self, result: &'a [T]) -> Page<'a, T> {
        let range = self.advance(result.len());
        Page { items: &result[range], remaining: self.remaining(result.len()) }
    }
}
