//! Offset grammar: "3 weeks ago", "next june", "last wednesday".
//!
//! An offset either counts whole intervals away from its origin, or, when it
//! names a weekday or month, moves to the closest matching value and then
//! repeats whole weeks/years in its direction:
//!
//! ```text
//! plain:  origin + sign(direction) * count * interval
//! value:  origin + (target - start) + sign(direction) * count * (7 days | 12 months)
//! ```

use chrono::{DateTime, Datelike, Month, TimeZone, Weekday};

use super::metrics::Matched;
use super::shift::{shift_days, shift_months, shift_ymd};
use crate::error::ParseError;
use crate::{Direction, Interval, OffsetValue};

/// Partial match of the offset grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetAccumulator {
    pub interval: Interval,
    pub direction: Direction,
    pub count: u32,
    pub value: Option<OffsetValue>,
    /// Tokens explained by this grammar.
    pub size: usize,
}

impl Default for OffsetAccumulator {
    fn default() -> Self {
        Self { interval: Interval::Day, direction: Direction::Current, count: 1, value: None, size: 0 }
    }
}

/// One recognized piece of an offset expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUpdate {
    Filler,
    Direction(Direction),
    Count(u32),
    Interval(Interval),
    Weekday(Weekday),
    Month(Month),
}

impl OffsetUpdate {
    pub fn matched(self) -> Matched {
        match self {
            OffsetUpdate::Filler => Matched::FILLER,
            OffsetUpdate::Direction(_) => Matched::DIRECTION,
            OffsetUpdate::Count(_) => Matched::COUNT,
            OffsetUpdate::Interval(_) => Matched::INTERVAL,
            OffsetUpdate::Weekday(_) => Matched::WEEKDAY,
            OffsetUpdate::Month(_) => Matched::MONTH,
        }
    }
}

impl OffsetAccumulator {
    /// Fold a classifier hit that consumed `consumed` tokens.
    ///
    /// Filler words move the cursor but do not count towards `size`.
    pub(crate) fn apply(&mut self, update: OffsetUpdate, consumed: usize) {
        match update {
            OffsetUpdate::Filler => return,
            OffsetUpdate::Direction(direction) => self.direction = direction,
            OffsetUpdate::Count(count) => self.count = count,
            OffsetUpdate::Interval(interval) => self.interval = interval,
            OffsetUpdate::Weekday(weekday) => {
                self.value = Some(OffsetValue::Weekday(weekday));
                self.interval = Interval::Weekday;
            }
            OffsetUpdate::Month(month) => {
                self.value = Some(OffsetValue::Month(month));
                self.interval = Interval::Month;
            }
        }
        self.size += consumed;
    }

    /// Resolve the offset against `origin`.
    pub fn compile<Tz: TimeZone>(&self, origin: &DateTime<Tz>) -> Result<DateTime<Tz>, ParseError> {
        match (self.interval, self.value) {
            (Interval::Weekday | Interval::Month, Some(value)) => self.value_offset(origin, value),
            _ => self.interval_offset(origin),
        }
    }

    fn value_offset<Tz: TimeZone>(&self, origin: &DateTime<Tz>, value: OffsetValue) -> Result<DateTime<Tz>, ParseError> {
        let repeats = i64::from(self.count) * self.direction.sign();

        let shifted = match (self.interval, value) {
            (Interval::Weekday, OffsetValue::Weekday(target)) => {
                let start = i64::from(origin.weekday().num_days_from_sunday());
                let delta = i64::from(target.num_days_from_sunday()) - start + 7 * repeats;
                shift_days(origin.clone(), delta)
            }
            (Interval::Month, OffsetValue::Month(target)) => {
                let start = i64::from(origin.month());
                let delta = i64::from(target.number_from_month()) - start + 12 * repeats;
                shift_months(origin.clone(), delta)
            }
            (interval, value) => {
                return Err(ParseError::OffsetCompileFailed(format!(
                    "{:?} value cannot anchor a {:?} offset",
                    value, interval
                )));
            }
        };

        shifted.ok_or_else(|| self.out_of_range())
    }

    fn interval_offset<Tz: TimeZone>(&self, origin: &DateTime<Tz>) -> Result<DateTime<Tz>, ParseError> {
        let count = i64::from(self.count);
        let (days, months, years) = match self.interval {
            Interval::Day => (count, 0, 0),
            Interval::Week => (7 * count, 0, 0),
            Interval::Month => (0, count, 0),
            Interval::Year => (0, 0, count),
            Interval::Century => (0, 0, 100 * count),
            Interval::Weekday => {
                return Err(ParseError::OffsetCompileFailed("weekday offset without a weekday".to_string()));
            }
        };

        let sign = self.direction.sign();
        shift_ymd(origin.clone(), sign * days, sign * months, sign * years).ok_or_else(|| self.out_of_range())
    }

    fn out_of_range(&self) -> ParseError {
        ParseError::OffsetCompileFailed(format!(
            "{} x {:?} ({:?}) leaves the supported calendar range",
            self.count, self.interval, self.direction
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::super::shift::test_zone::Eastern2013;
    use super::*;

    // Tuesday.
    fn origin() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 2, 12, 4, 30, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 4, 30, 0).unwrap()
    }

    fn offset(interval: Interval, direction: Direction, count: u32, value: Option<OffsetValue>) -> OffsetAccumulator {
        OffsetAccumulator { interval, direction, count, value, size: 1 }
    }

    #[test]
    fn interval_offsets() {
        let cases = [
            (offset(Interval::Week, Direction::Left, 3, None), day(2013, 1, 22)),
            (offset(Interval::Day, Direction::Right, 2, None), day(2013, 2, 14)),
            (offset(Interval::Month, Direction::Left, 1, None), day(2013, 1, 12)),
            (offset(Interval::Year, Direction::Right, 1, None), day(2014, 2, 12)),
            (offset(Interval::Century, Direction::Left, 1, None), day(1913, 2, 12)),
            (offset(Interval::Week, Direction::Current, 5, None), day(2013, 2, 12)),
        ];

        for (acc, expected) in cases {
            assert_eq!(acc.compile(&origin()), Ok(expected), "{:?}", acc);
        }
    }

    #[test]
    fn weekday_value_offsets() {
        let weekday = |w, direction, count| offset(Interval::Weekday, direction, count, Some(OffsetValue::Weekday(w)));

        let cases = [
            (weekday(Weekday::Tue, Direction::Current, 1), day(2013, 2, 12)),
            (weekday(Weekday::Tue, Direction::Right, 1), day(2013, 2, 19)),
            (weekday(Weekday::Tue, Direction::Left, 2), day(2013, 1, 29)),
            (weekday(Weekday::Fri, Direction::Current, 1), day(2013, 2, 15)),
            (weekday(Weekday::Sun, Direction::Current, 1), day(2013, 2, 10)),
            (weekday(Weekday::Sun, Direction::Right, 1), day(2013, 2, 17)),
            (weekday(Weekday::Wed, Direction::Left, 1), day(2013, 2, 6)),
        ];

        for (acc, expected) in cases {
            assert_eq!(acc.compile(&origin()), Ok(expected), "{:?}", acc);
        }
    }

    #[test]
    fn month_value_offsets() {
        let month = |m, direction| offset(Interval::Month, direction, 1, Some(OffsetValue::Month(m)));

        assert_eq!(month(Month::June, Direction::Right).compile(&origin()), Ok(day(2014, 6, 12)));
        assert_eq!(month(Month::July, Direction::Left).compile(&origin()), Ok(day(2012, 7, 12)));
        assert_eq!(month(Month::February, Direction::Current).compile(&origin()), Ok(day(2013, 2, 12)));
    }

    #[test]
    fn value_kind_must_match_interval() {
        let acc = offset(Interval::Month, Direction::Right, 1, Some(OffsetValue::Weekday(Weekday::Fri)));
        assert!(matches!(acc.compile(&origin()), Err(ParseError::OffsetCompileFailed(_))));
    }

    #[test]
    fn value_is_ignored_for_plain_intervals() {
        let acc = offset(Interval::Week, Direction::Right, 2, Some(OffsetValue::Weekday(Weekday::Fri)));
        assert_eq!(acc.compile(&origin()), Ok(day(2013, 2, 26)));
    }

    #[test]
    fn day_steps_across_a_skipped_hour() {
        let spring = Eastern2013.with_ymd_and_hms(2013, 3, 9, 2, 30, 0).unwrap();
        let next_day = offset(Interval::Day, Direction::Right, 1, None);
        assert_eq!(next_day.compile(&spring).unwrap().to_rfc3339(), "2013-03-10T03:30:00-04:00");

        let autumn = Eastern2013.with_ymd_and_hms(2013, 11, 2, 1, 30, 0).unwrap();
        assert_eq!(next_day.compile(&autumn).unwrap().to_rfc3339(), "2013-11-03T01:30:00-04:00");
    }

    #[test]
    fn compile_is_pure() {
        let acc = offset(Interval::Weekday, Direction::Right, 1, Some(OffsetValue::Weekday(Weekday::Mon)));
        assert_eq!(acc.compile(&origin()), acc.compile(&origin()));
    }

    #[test]
    fn filler_does_not_grow_size() {
        let mut acc = OffsetAccumulator::default();
        acc.apply(OffsetUpdate::Filler, 1);
        assert_eq!(acc.size, 0);

        acc.apply(OffsetUpdate::Count(2015), 4);
        acc.apply(OffsetUpdate::Month(Month::June), 1);
        assert_eq!(acc.size, 5);
        assert_eq!(acc.interval, Interval::Month);
        assert_eq!(acc.value, Some(OffsetValue::Month(Month::June)));
    }
}
