use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Cardinal and ordinal number words, plus the scale words a stem can carry.
static NUMBER_WORDS: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("zero", 0),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fourty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
        ("first", 1),
        ("second", 2),
        ("third", 3),
        ("fourth", 4),
        ("fifth", 5),
        ("sixth", 6),
        ("seventh", 7),
        ("eighth", 8),
        ("ninth", 9),
        ("tenth", 10),
        ("eleventh", 11),
        ("twelfth", 12),
        ("twelth", 12),
        ("thirteenth", 13),
        ("fourteenth", 14),
        ("fifteenth", 15),
        ("sixteenth", 16),
        ("seventeenth", 17),
        ("eighteenth", 18),
        ("nineteenth", 19),
        ("twentieth", 20),
        ("thirtieth", 30),
        ("hundred", 100),
        ("thousand", 1000),
    ])
});

/// A single token read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWord {
    /// A mapped number word; more words of the same stem may follow.
    Stem(i64),
    /// A digit string ("15", "1st"); always the last word of a stem.
    Terminal(i64),
}

impl IntegerWord {
    pub fn value(self) -> i64 {
        match self {
            IntegerWord::Stem(v) | IntegerWord::Terminal(v) => v,
        }
    }
}

/// Read `word` as a number word or as the first digit run it contains.
pub fn classify_integer_word(word: &str) -> Option<IntegerWord> {
    if let Some(value) = NUMBER_WORDS.get(word) {
        return Some(IntegerWord::Stem(*value));
    }

    digits_value(word).map(IntegerWord::Terminal)
}

/// First `-?[0-9]+` run in `word`, parsed as a 32-bit integer.
pub fn digits_value(word: &str) -> Option<i64> {
    let digits = regex!(r"-?[0-9]+").find(word)?;
    digits.as_str().parse::<i32>().ok().map(i64::from)
}
