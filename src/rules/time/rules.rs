//! Single-token time classifiers.

use chrono::{Month, Weekday};

use crate::cursor::Cursor;
use crate::rules::numeral::helpers::digits_value;
use crate::rules::time::lexicon::{DAY_SYNONYMS, DIRECTIONS, MONTHS, WEEKDAYS, interval_patterns, is_common_word};
use crate::rules::{Classified, NoMatch};
use crate::{DaySynonym, Direction, Interval};

/// "and", "a", "of", "the", "in".
pub fn common(cursor: &Cursor<'_>) -> Classified<()> {
    let word = cursor.current().map_err(|_| NoMatch)?;
    if is_common_word(word) { Ok(((), 1)) } else { Err(NoMatch) }
}

pub fn direction(cursor: &Cursor<'_>) -> Classified<Direction> {
    lookup(cursor, |word| DIRECTIONS.get(word).copied())
}

pub fn interval(cursor: &Cursor<'_>) -> Classified<Interval> {
    lookup(cursor, |word| {
        interval_patterns().into_iter().find(|(re, _)| re.is_match(word)).map(|(_, interval)| interval)
    })
}

pub fn weekday(cursor: &Cursor<'_>) -> Classified<Weekday> {
    lookup(cursor, |word| WEEKDAYS.get(word).copied())
}

/// A month name or a bare number between 1 and 12.
pub fn month(cursor: &Cursor<'_>) -> Classified<Month> {
    lookup(cursor, |word| {
        MONTHS.get(word).copied().or_else(|| {
            let number = u8::try_from(digits_value(word)?).ok()?;
            Month::try_from(number).ok()
        })
    })
}

pub fn day_synonym(cursor: &Cursor<'_>) -> Classified<DaySynonym> {
    lookup(cursor, |word| DAY_SYNONYMS.get(word).copied())
}

fn lookup<T>(cursor: &Cursor<'_>, find: impl FnOnce(&str) -> Option<T>) -> Classified<T> {
    let word = cursor.current().map_err(|_| NoMatch)?;
    find(word).map(|value| (value, 1)).ok_or(NoMatch)
}
