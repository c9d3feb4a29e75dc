//! Build-loop trace and run timings.
//!
//! The hot path only folds classifier hits into the accumulators; the trace
//! kept here is what `parse_verbose_with` surfaces for debugging: one `Step`
//! per cursor position visited, the union of classifier kinds that fired, and
//! how long each phase took.

use std::time::Duration;

use super::date::DateUpdate;
use super::offset::OffsetUpdate;

bitflags::bitflags! {
    /// Classifier kinds that recognized at least one token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Matched: u16 {
        const FILLER    = 1 << 0;
        const DIRECTION = 1 << 1;
        const COUNT     = 1 << 2;
        const INTERVAL  = 1 << 3;
        const WEEKDAY   = 1 << 4;
        const MONTH     = 1 << 5;
        const SYNONYM   = 1 << 6;
        const MONTHDAY  = 1 << 7;
        const YEAR      = 1 << 8;
    }
}

/// What each grammar made of the token at one cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub position: usize,
    pub token: String,
    /// Offset-grammar hit and the tokens it consumed.
    pub offset: Option<(OffsetUpdate, usize)>,
    /// Date-grammar hit and the tokens it consumed.
    pub date: Option<(DateUpdate, usize)>,
}

impl Step {
    /// Tokens the cursor moves past after this step (at least one).
    pub fn advance(&self) -> usize {
        let offset = self.offset.map_or(0, |(_, n)| n);
        let date = self.date.map_or(0, |(_, n)| n);
        offset.max(date).max(1)
    }

    pub fn matched(&self) -> Matched {
        let mut matched = Matched::empty();
        if let Some((update, _)) = self.offset {
            matched |= update.matched();
        }
        if let Some((update, _)) = self.date {
            matched |= update.matched();
        }
        matched
    }
}

/// Why the build loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stop {
    /// The cursor ran off the end of the tokens.
    #[default]
    Exhausted,
    /// Too many consecutive positions matched neither grammar.
    FailureLimit,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent in the build loop.
    pub build: Duration,
    /// Time spent compiling accumulators into a date.
    pub compile: Duration,
    pub steps: Vec<Step>,
    pub stop: Stop,
}

impl RunMetrics {
    pub fn matched(&self) -> Matched {
        self.steps.iter().fold(Matched::empty(), |acc, step| acc | step.matched())
    }
}
