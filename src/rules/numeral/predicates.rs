/// A teen word leading a year, as in "*nineteen* ninety five".
pub fn is_teen_century(first: i64, second: i64) -> bool {
    first > 10 && first < 20 && second < 100
}

/// Values that multiply what precedes them: "hundred", "thousand", tens.
pub fn is_multiplier(value: i64) -> bool {
    value % 10 == 0
}

/// Returns true when `value` can name a day of the month.
pub fn is_day_of_month(value: i64) -> bool {
    (1..=31).contains(&value)
}

/// Returns true when `value` looks like a calendar year.
pub fn is_year(value: i64) -> bool {
    value >= 1000
}
