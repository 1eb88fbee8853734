//! Frame-paced replay of a finished search.
//!
//! A front end calls [`Playback::advance`] once per frame and draws
//! [`visited`](Playback::visited); the final path becomes visible only once
//! every exploration step has been shown.

use mazer_core::Position;
use mazer_paths::SearchResult;

/// Cursor over a [`SearchResult`]'s exploration order.
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    result: &'a SearchResult,
    shown: usize,
}

impl<'a> Playback<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self { result, shown: 0 }
    }

    /// Reveal the next visited position, or `None` once all are shown.
    pub fn advance(&mut self) -> Option<Position> {
        let p = self.result.exploration.get(self.shown).copied()?;
        self.shown += 1;
        Some(p)
    }

    /// Reveal up to `n` steps at once and return how many were revealed.
    pub fn advance_by(&mut self, n: usize) -> usize {
        let before = self.shown;
        self.shown = self.shown.saturating_add(n).min(self.result.exploration.len());
        self.shown - before
    }

    /// Positions revealed so far.
    pub fn visited(&self) -> &'a [Position] {
        &self.result.exploration[..self.shown]
    }

    /// Whether every exploration step has been revealed.
    pub fn is_finished(&self) -> bool {
        self.shown == self.result.exploration.len()
    }

    /// The final path, empty until playback has finished.
    pub fn path(&self) -> &'a [Position] {
        if self.is_finished() {
            &self.result.path
        } else {
            &[]
        }
    }

    /// Start over from the first step.
    pub fn rewind(&mut self) {
        self.shown = 0;
    }
}

impl Iterator for Playback<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        self.advance()
    }
}
