//! Static word tables shared by the time classifiers.

use std::collections::HashMap;

use chrono::{Month, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{DaySynonym, Direction, Interval};

/// Filler words either grammar may skip without breaking a pattern.
const COMMON_WORDS: &[&str] = &["and", "a", "of", "the", "in"];

pub fn is_common_word(word: &str) -> bool {
    COMMON_WORDS.contains(&word)
}

pub static DIRECTIONS: Lazy<HashMap<&'static str, Direction>> = Lazy::new(|| {
    HashMap::from([
        ("this", Direction::Current),
        ("before", Direction::Left),
        ("ago", Direction::Left),
        ("last", Direction::Left),
        ("next", Direction::Right),
        ("future", Direction::Right),
        ("from", Direction::Right),
        ("after", Direction::Right),
    ])
});

pub static DAY_SYNONYMS: Lazy<HashMap<&'static str, DaySynonym>> = Lazy::new(|| {
    HashMap::from([
        ("yesterday", DaySynonym::Yesterday),
        ("today", DaySynonym::Today),
        ("tomorrow", DaySynonym::Tomorrow),
    ])
});

/// Weekday names, plurals and abbreviations. Single letters shared by two
/// days resolve to the first of them in the week ("s" Sunday, "t" Tuesday).
pub static WEEKDAYS: Lazy<HashMap<&'static str, Weekday>> = Lazy::new(|| {
    HashMap::from([
        ("s", Weekday::Sun),
        ("sun", Weekday::Sun),
        ("sunday", Weekday::Sun),
        ("sundays", Weekday::Sun),
        ("m", Weekday::Mon),
        ("mon", Weekday::Mon),
        ("monday", Weekday::Mon),
        ("mondays", Weekday::Mon),
        ("t", Weekday::Tue),
        ("tues", Weekday::Tue),
        ("tuesday", Weekday::Tue),
        ("tuesdays", Weekday::Tue),
        ("wed", Weekday::Wed),
        ("wednesday", Weekday::Wed),
        ("wednesdays", Weekday::Wed),
        ("th", Weekday::Thu),
        ("thu", Weekday::Thu),
        ("thurs", Weekday::Thu),
        ("thursday", Weekday::Thu),
        ("thursdays", Weekday::Thu),
        ("f", Weekday::Fri),
        ("fri", Weekday::Fri),
        ("friday", Weekday::Fri),
        ("fridays", Weekday::Fri),
        ("sat", Weekday::Sat),
        ("saturday", Weekday::Sat),
        ("saturdays", Weekday::Sat),
    ])
});

pub static MONTHS: Lazy<HashMap<&'static str, Month>> = Lazy::new(|| {
    HashMap::from([
        ("jan", Month::January),
        ("january", Month::January),
        ("feb", Month::February),
        ("february", Month::February),
        ("mar", Month::March),
        ("march", Month::March),
        ("apr", Month::April),
        ("april", Month::April),
        ("may", Month::May),
        ("june", Month::June),
        ("july", Month::July),
        ("aug", Month::August),
        ("august", Month::August),
        ("sep", Month::September),
        ("sept", Month::September),
        ("september", Month::September),
        ("oct", Month::October),
        ("october", Month::October),
        ("nov", Month::November),
        ("november", Month::November),
        ("dec", Month::December),
        ("december", Month::December),
    ])
});

/// Anchored prefix patterns for interval words, checked in order.
pub fn interval_patterns() -> [(&'static Regex, Interval); 5] {
    [
        (regex!(r"^days?"), Interval::Day),
        (regex!(r"^weeks?"), Interval::Week),
        (regex!(r"^months?"), Interval::Month),
        (regex!(r"^years?"), Interval::Year),
        (regex!(r"^centur(y|ies)"), Interval::Century),
    ]
}
