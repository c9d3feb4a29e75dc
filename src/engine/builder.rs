//! The single classification pass.
//!
//! Both grammars look at the same cursor position on every iteration; neither
//! shadows the other:
//!
//! ```text
//! position ──┬─ offset: common | direction | count | interval | weekday | month
//!            └─ date:   common | synonym | weekday | month (once) | day-of-month | year
//!
//! advance by max(consumed) ── or by 1 on a double miss
//! stop after `failure_limit` consecutive double misses, or at the end of input
//! ```
//!
//! Known quirk: the date grammar tries `month` before
//! `day-of-month`, guarded only against a month already being set. A leading
//! bare number ("1 june", "3 weeks ago") is therefore claimed as the month.

use tracing::{debug, trace};

use super::date::{DateAccumulator, DateUpdate};
use super::metrics::{Step, Stop};
use super::offset::{OffsetAccumulator, OffsetUpdate};
use crate::api::Options;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::rules::{Classified, numeral, time};

/// Both accumulators after the pass, plus its trace.
#[derive(Debug, Clone, Default)]
pub(crate) struct Contexts {
    pub offset: OffsetAccumulator,
    pub date: DateAccumulator,
    pub steps: Vec<Step>,
    pub stop: Stop,
}

impl Contexts {
    pub fn is_empty(&self) -> bool {
        self.offset.size == 0 && self.date.size == 0
    }
}

/// Run the pass. Fails with [`ParseError::NoDateFound`] when neither grammar
/// explained any token; the partial trace is still returned alongside.
pub(crate) fn build(tokens: &[String], options: &Options) -> (Contexts, Result<(), ParseError>) {
    let mut contexts = Contexts::default();
    let mut cursor = Cursor::new(tokens);
    let mut failures = 0;

    while !cursor.is_empty() {
        let step = Step {
            position: cursor.position(),
            token: cursor.current().unwrap_or_default().to_string(),
            offset: classify_offset(&cursor).ok(),
            date: classify_date(&cursor, &contexts.date).ok(),
        };

        trace!(position = step.position, token = %step.token, offset = ?step.offset, date = ?step.date, "step");

        if let Some((update, consumed)) = step.offset {
            contexts.offset.apply(update, consumed);
        }
        if let Some((update, consumed)) = step.date {
            contexts.date.apply(update, consumed);
        }

        let missed = step.offset.is_none() && step.date.is_none();
        let advance = step.advance();
        contexts.steps.push(step);

        if missed {
            failures += 1;
            if failures >= options.failure_limit {
                contexts.stop = Stop::FailureLimit;
                break;
            }
        } else {
            failures = 0;
        }

        if cursor.at_end() {
            break;
        }
        let Ok(advance) = isize::try_from(advance) else {
            break;
        };
        if cursor.advance_by(advance).is_err() {
            break;
        }
    }

    debug!(
        offset = ?contexts.offset,
        date = ?contexts.date,
        stop = ?contexts.stop,
        steps = contexts.steps.len(),
        "accumulators built"
    );

    let outcome = if contexts.is_empty() { Err(ParseError::NoDateFound) } else { Ok(()) };
    (contexts, outcome)
}

/// First offset-grammar classifier that recognizes the current position.
pub(crate) fn classify_offset(cursor: &Cursor<'_>) -> Classified<OffsetUpdate> {
    time::common(cursor)
        .map(|(_, n)| (OffsetUpdate::Filler, n))
        .or_else(|_| time::direction(cursor).map(|(d, n)| (OffsetUpdate::Direction(d), n)))
        .or_else(|_| count(cursor).map(|(c, n)| (OffsetUpdate::Count(c), n)))
        .or_else(|_| time::interval(cursor).map(|(i, n)| (OffsetUpdate::Interval(i), n)))
        .or_else(|_| time::weekday(cursor).map(|(w, n)| (OffsetUpdate::Weekday(w), n)))
        .or_else(|_| time::month(cursor).map(|(m, n)| (OffsetUpdate::Month(m), n)))
}

/// First date-grammar classifier that recognizes the current position.
/// `month` only competes while `date` has no month yet.
pub(crate) fn classify_date(cursor: &Cursor<'_>, date: &DateAccumulator) -> Classified<DateUpdate> {
    time::common(cursor)
        .map(|(_, n)| (DateUpdate::Filler, n))
        .or_else(|_| time::day_synonym(cursor).map(|(s, n)| (DateUpdate::Synonym(s), n)))
        .or_else(|_| time::weekday(cursor).map(|(w, n)| (DateUpdate::Weekday(w), n)))
        .or_else(|no_match| match date.month {
            None => time::month(cursor).map(|(m, n)| (DateUpdate::Month(m), n)),
            Some(_) => Err(no_match),
        })
        .or_else(|_| numeral::day_of_month(cursor).map(|(d, n)| (DateUpdate::MonthDay(d), n)))
        .or_else(|_| numeral::year(cursor).map(|(y, n)| (DateUpdate::Year(y), n)))
}

/// An integer stem used as an offset's repeat count.
fn count(cursor: &Cursor<'_>) -> Classified<u32> {
    let (value, consumed) = numeral::integer_stem(cursor)?;
    let count = u32::try_from(value).map_err(|_| crate::rules::NoMatch)?;
    Ok((count, consumed))
}

#[cfg(test)]
mod tests {
    use chrono::{Month, Weekday};

    use super::*;
    use crate::{DaySynonym, Direction, Interval, OffsetValue};

    fn run(input: &str) -> (Contexts, Result<(), ParseError>) {
        build(&crate::tokenize(input), &Options::default())
    }

    fn offset_of(input: &str) -> OffsetAccumulator {
        run(input).0.offset
    }

    fn date_of(input: &str) -> DateAccumulator {
        run(input).0.date
    }

    #[test]
    fn offset_accumulator_examples() {
        let cases = [
            (
                "3 weeks ago",
                OffsetAccumulator { interval: Interval::Week, direction: Direction::Left, count: 3, value: None, size: 3 },
            ),
            (
                "last wednesday",
                OffsetAccumulator {
                    interval: Interval::Weekday,
                    direction: Direction::Left,
                    count: 1,
                    value: Some(OffsetValue::Weekday(Weekday::Wed)),
                    size: 2,
                },
            ),
            (
                "2 tuesdays ago",
                OffsetAccumulator {
                    interval: Interval::Weekday,
                    direction: Direction::Left,
                    count: 2,
                    value: Some(OffsetValue::Weekday(Weekday::Tue)),
                    size: 3,
                },
            ),
            (
                "last month",
                OffsetAccumulator { interval: Interval::Month, direction: Direction::Left, count: 1, value: None, size: 2 },
            ),
            (
                "next june",
                OffsetAccumulator {
                    interval: Interval::Month,
                    direction: Direction::Right,
                    count: 1,
                    value: Some(OffsetValue::Month(Month::June)),
                    size: 2,
                },
            ),
            (
                "last july",
                OffsetAccumulator {
                    interval: Interval::Month,
                    direction: Direction::Left,
                    count: 1,
                    value: Some(OffsetValue::Month(Month::July)),
                    size: 2,
                },
            ),
            (
                "2 weeks from today",
                OffsetAccumulator { interval: Interval::Week, direction: Direction::Right, count: 2, value: None, size: 3 },
            ),
            (
                "tuesday",
                OffsetAccumulator {
                    interval: Interval::Weekday,
                    direction: Direction::Current,
                    count: 1,
                    value: Some(OffsetValue::Weekday(Weekday::Tue)),
                    size: 1,
                },
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(offset_of(input), expected, "input '{}'", input);
        }
    }

    #[test]
    fn date_accumulator_examples() {
        let cases = [
            (
                "june 1st 2015",
                DateAccumulator {
                    month: Some(Month::June),
                    monthday: Some(1),
                    year: Some(2015),
                    size: 3,
                    ..Default::default()
                },
            ),
            ("tomorrow", DateAccumulator { synonym: Some(DaySynonym::Tomorrow), size: 1, ..Default::default() }),
            ("day after tomorrow", DateAccumulator { synonym: Some(DaySynonym::Tomorrow), size: 1, ..Default::default() }),
        ];

        for (input, expected) in cases {
            assert_eq!(date_of(input), expected, "input '{}'", input);
        }
    }

    #[test]
    fn lone_weekday_routes_through_offset() {
        let (contexts, outcome) = run("tuesday");
        assert_eq!(outcome, Ok(()));
        assert_eq!(contexts.date.weekday, Some(Weekday::Tue));
        assert!(!contexts.date.is_valid());
        assert_eq!(contexts.offset.value, Some(OffsetValue::Weekday(Weekday::Tue)));
    }

    #[test]
    fn stem_spanning_filler_counts_every_token() {
        let date = date_of("the first of june two thousand and 15");
        assert_eq!(date.month, Some(Month::June));
        assert_eq!(date.monthday, Some(1));
        assert_eq!(date.year, Some(2015));
        // (first of) + june + (two thousand and 15); the leading "the" adds nothing.
        assert_eq!(date.size, 7);
    }

    #[test]
    fn leading_number_is_claimed_as_month() {
        let date = date_of("1 june 2015");
        assert_eq!(date.month, Some(Month::January));
        assert_eq!(date.monthday, None);
        assert_eq!(date.year, Some(2015));
    }

    #[test]
    fn filler_only_input_finds_nothing() {
        for input in ["the", "and of the", "a in", ""] {
            let (contexts, outcome) = run(input);
            assert_eq!(outcome, Err(ParseError::NoDateFound), "input '{}'", input);
            assert!(contexts.is_empty());
        }
    }

    #[test]
    fn stops_after_consecutive_misses() {
        let (contexts, outcome) = run("x x x x june");
        assert_eq!(outcome, Err(ParseError::NoDateFound));
        assert_eq!(contexts.stop, Stop::FailureLimit);
        assert_eq!(contexts.steps.len(), 4);

        let (contexts, outcome) = run("x x x june");
        assert_eq!(outcome, Ok(()));
        assert_eq!(contexts.date.month, Some(Month::June));
        assert_eq!(contexts.stop, Stop::Exhausted);
    }

    #[test]
    fn failure_limit_is_configurable() {
        let options = Options { failure_limit: 1 };
        let (_, outcome) = build(&crate::tokenize("x june"), &options);
        assert_eq!(outcome, Err(ParseError::NoDateFound));
    }

    #[test]
    fn matches_reset_the_failure_count() {
        let (contexts, outcome) = run("x x x the x x x june");
        assert_eq!(outcome, Ok(()));
        assert_eq!(contexts.date.month, Some(Month::June));
    }
}
