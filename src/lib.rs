//! Resolve informal English date expressions into calendar dates.
//!
//! Input text is split into normalized word tokens, then a single pass over
//! those tokens feeds two independent grammars:
//!
//! ```text
//! tokens ──▶ Cursor ──▶ build loop ──┬─▶ OffsetAccumulator ("3 weeks ago", "next june")
//!                                    └─▶ DateAccumulator   ("june 1st 2015", "tomorrow")
//!                                              │
//!                                              ▼
//!                        compile date (origin) ─▶ compile offset ─▶ ParseResult
//! ```
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use datewords::{Context, Options, parse_with};
//!
//! let ctx = Context::new(Utc.with_ymd_and_hms(2013, 2, 12, 4, 30, 0).unwrap());
//! let res = parse_with("next tuesday", &ctx, &Options::default()).unwrap();
//! assert_eq!(res.date.format("%Y-%m-%d").to_string(), "2013-02-19");
//! assert_eq!(res.matched_size, 2);
//! ```

#[macro_use]
mod macros;
mod api;
mod cursor;
mod engine;
mod error;
mod rules;
mod tokenize;

pub use api::{
    Context, Options, ParseDetails, ParseResult, ParseResultVerbose, StepSummary, parse, parse_tokens,
    parse_verbose_with, parse_with,
};
pub use chrono::{Month, Weekday};
pub use engine::{DateAccumulator, Matched, OffsetAccumulator};
pub use error::ParseError;
pub use tokenize::{normalize_word, tokenize};

// --- Shared vocabulary ------------------------------------------------------

/// Unit an offset is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interval {
    #[default]
    Day,
    Weekday,
    Week,
    Month,
    Year,
    Century,
}

/// Temporal direction of an offset relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Current,
    Right,
}

impl Direction {
    /// `-1`, `0` or `1`.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Current => 0,
            Direction::Right => 1,
        }
    }
}

/// Words that name a day relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySynonym {
    Today,
    Tomorrow,
    Yesterday,
}

impl DaySynonym {
    /// Day shift applied to the reference instant.
    pub fn day_offset(self) -> i64 {
        match self {
            DaySynonym::Yesterday => -1,
            DaySynonym::Today => 0,
            DaySynonym::Tomorrow => 1,
        }
    }
}

/// A specific weekday or month an offset is anchored to ("next *june*",
/// "last *wednesday*") instead of a pure interval count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetValue {
    Weekday(Weekday),
    Month(Month),
}
