//! Absolute-date grammar: "june 1st 2015", "tomorrow".

use chrono::{DateTime, Datelike, Month, NaiveDate, TimeZone, Weekday};

use super::metrics::Matched;
use super::shift::{localize, shift_days};
use crate::DaySynonym;
use crate::error::ParseError;

/// Partial match of the absolute-date grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateAccumulator {
    pub synonym: Option<DaySynonym>,
    pub weekday: Option<Weekday>,
    pub month: Option<Month>,
    pub monthday: Option<u32>,
    pub year: Option<i32>,
    /// Tokens explained by this grammar.
    pub size: usize,
}

/// One recognized piece of an absolute date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUpdate {
    Filler,
    Synonym(DaySynonym),
    Weekday(Weekday),
    Month(Month),
    MonthDay(u32),
    Year(i32),
}

impl DateUpdate {
    pub fn matched(self) -> Matched {
        match self {
            DateUpdate::Filler => Matched::FILLER,
            DateUpdate::Synonym(_) => Matched::SYNONYM,
            DateUpdate::Weekday(_) => Matched::WEEKDAY,
            DateUpdate::Month(_) => Matched::MONTH,
            DateUpdate::MonthDay(_) => Matched::MONTHDAY,
            DateUpdate::Year(_) => Matched::YEAR,
        }
    }
}

impl DateAccumulator {
    pub(crate) fn apply(&mut self, update: DateUpdate, consumed: usize) {
        match update {
            DateUpdate::Filler => return,
            DateUpdate::Synonym(synonym) => self.synonym = Some(synonym),
            DateUpdate::Weekday(weekday) => self.weekday = Some(weekday),
            DateUpdate::Month(month) => self.month = Some(month),
            DateUpdate::MonthDay(day) => self.monthday = Some(day),
            DateUpdate::Year(year) => self.year = Some(year),
        }
        self.size += consumed;
    }

    /// Whether this match may stand as an absolute date.
    ///
    /// A lone weekday ("tuesday") is never a date on its own; it resolves
    /// through the offset grammar as "this tuesday".
    pub fn is_valid(&self) -> bool {
        self.size > 0 && !(self.size == 1 && self.weekday.is_some())
    }

    /// Build the date. Day synonyms shift `now` by whole days; anything else
    /// is local midnight of the named day in `now`'s zone, with the year and
    /// month defaulting to `now`'s and the day to the 1st.
    pub fn compile<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<DateTime<Tz>, ParseError> {
        if let Some(synonym) = self.synonym {
            return shift_days(now.clone(), synonym.day_offset())
                .ok_or_else(|| ParseError::DateCompileFailed(format!("{:?} is out of range", synonym)));
        }

        let year = self.year.unwrap_or_else(|| now.year());
        let month = self.month.map(|m| m.number_from_month()).unwrap_or_else(|| now.month());
        let day = self.monthday.filter(|d| *d >= 1).unwrap_or(1);

        let midnight = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| ParseError::DateCompileFailed(format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day)))?;

        localize(&now.timezone(), midnight)
            .ok_or_else(|| ParseError::DateCompileFailed(format!("{} is out of range", midnight)))
    }
}
