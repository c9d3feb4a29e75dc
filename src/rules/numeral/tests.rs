use crate::cursor::Cursor;
use crate::rules::NoMatch;
use crate::rules::numeral::rules::compose;
use crate::rules::numeral::{day_of_month, integer_stem, year};

fn words(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

#[test]
fn integer_stem_examples_matching() {
    // Array of (expected_value, expected_consumed, input_string)
    let cases: Vec<(i64, usize, &str)> = vec![
        (2015, 4, "two thousand and 15"),
        (2015, 3, "two thousand fifteen"),
        (2031, 5, "two thousand and thirty one"),
        (1500, 2, "fifteen hundred"),
        (1993, 3, "nineteen ninety 3"),
        (1995, 3, "nineteen ninety five"),
        (33, 2, "thirty three"),
        (200, 2, "two hundred"),
        (345, 4, "three hundred and 45"),
        (31, 2, "thirty first"),
        (3, 1, "3 weeks ago"),
        (2, 1, "two weeks"),
        (1, 1, "1st 2015"),
        (12, 1, "twelfth"),
        (2, 2, "two and"),
    ];

    for (expected, expected_consumed, input) in cases {
        let tokens = words(input);
        let cursor = Cursor::new(&tokens);

        let (value, consumed) = integer_stem(&cursor).unwrap_or_else(|_| panic!("no stem for '{}'", input));
        assert_eq!(value, expected, "value for '{}'", input);
        assert_eq!(consumed, expected_consumed, "consumed for '{}'", input);
    }
}

#[test]
fn integer_stem_window_is_five_tokens() {
    let tokens = words("one and and and and 7");
    let cursor = Cursor::new(&tokens);

    assert_eq!(integer_stem(&cursor), Ok((1, 5)));
}

#[test]
fn integer_stem_rejects_words_and_pure_filler() {
    for input in ["weeks", "the and of", "next tuesday"] {
        let tokens = words(input);
        let cursor = Cursor::new(&tokens);
        assert_eq!(integer_stem(&cursor), Err(NoMatch), "input '{}'", input);
    }
}

#[test]
fn compose_folds_by_rule() {
    assert_eq!(compose(&[]), None);
    assert_eq!(compose(&[7]), Some(7));
    assert_eq!(compose(&[19, 5]), Some(1905));
    assert_eq!(compose(&[5, 1000, 3]), Some(5003));
    assert_eq!(compose(&[20, 4, 1]), Some(25));
}

#[test]
fn day_of_month_bounds() {
    let ok = words("thirty first");
    assert_eq!(day_of_month(&Cursor::new(&ok)), Ok((31, 2)));

    let too_big = words("32nd");
    assert_eq!(day_of_month(&Cursor::new(&too_big)), Err(NoMatch));

    let zero = words("zero");
    assert_eq!(day_of_month(&Cursor::new(&zero)), Err(NoMatch));
}

#[test]
fn year_needs_four_digits() {
    let ok = words("nineteen ninety five");
    assert_eq!(year(&Cursor::new(&ok)), Ok((1995, 3)));

    let digits = words("2015");
    assert_eq!(year(&Cursor::new(&digits)), Ok((2015, 1)));

    let short = words("999");
    assert_eq!(year(&Cursor::new(&short)), Err(NoMatch));
}
