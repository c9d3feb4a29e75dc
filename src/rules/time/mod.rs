pub(crate) mod lexicon;
pub(crate) mod rules;

pub(crate) use rules::{common, day_synonym, direction, interval, month, weekday};
