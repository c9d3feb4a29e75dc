use crate::cursor::Cursor;
use crate::rules::numeral::helpers::{IntegerWord, classify_integer_word};
use crate::rules::numeral::predicates::{is_day_of_month, is_multiplier, is_teen_century, is_year};
use crate::rules::time::lexicon::is_common_word;
use crate::rules::{Classified, NoMatch};

/// Number of tokens (current included) an integer stem may span.
const STEM_WINDOW: usize = 5;

/// Read a chain of number words starting at the cursor as one integer.
///
/// ```text
/// two thousand and 15   -> [2, 1000, 15]  -> 2 * 1000 + 15 = 2015
/// nineteen ninety 3     -> [19, 90, 3]    -> 19 * 100 + 90 + 3 = 1993
/// three hundred and 45  -> [3, 100, 45]   -> 3 * 100 + 45 = 345
/// thirty three          -> [30, 3]        -> 30 + 3 = 33
/// ```
///
/// Filler words ("and", "of", ...) are consumed without ending the chain. A
/// digit string always ends it. The consumed count covers every scanned token,
/// filler included.
pub fn integer_stem(cursor: &Cursor<'_>) -> Classified<i64> {
    let mut consumed = 0;
    let mut values = Vec::with_capacity(STEM_WINDOW);

    for n in 0..STEM_WINDOW {
        let Ok(word) = cursor.peek(n) else {
            break;
        };

        if is_common_word(word) {
            consumed += 1;
            continue;
        }

        let Some(integer) = classify_integer_word(word) else {
            break;
        };

        consumed += 1;
        values.push(integer.value());

        if let IntegerWord::Terminal(_) = integer {
            break;
        }
    }

    compose(&values).map(|value| (value, consumed)).ok_or(NoMatch)
}

/// Fold the values of a stem into a single integer.
pub(crate) fn compose(values: &[i64]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let Some(&second) = rest.first() else {
        return Some(first);
    };

    let (head, tail) = if is_teen_century(first, second) {
        (first * 100, rest)
    } else if is_multiplier(second) {
        (first * second, &rest[1..])
    } else {
        (0, values)
    };

    Some(head + tail.iter().sum::<i64>())
}

/// An integer stem in `1..=31`.
pub fn day_of_month(cursor: &Cursor<'_>) -> Classified<u32> {
    let (value, consumed) = integer_stem(cursor)?;
    if !is_day_of_month(value) {
        return Err(NoMatch);
    }

    let day = u32::try_from(value).map_err(|_| NoMatch)?;
    Ok((day, consumed))
}

/// An integer stem of at least four digits.
pub fn year(cursor: &Cursor<'_>) -> Classified<i32> {
    let (value, consumed) = integer_stem(cursor)?;
    if !is_year(value) {
        return Err(NoMatch);
    }

    let year = i32::try_from(value).map_err(|_| NoMatch)?;
    Ok((year, consumed))
}
