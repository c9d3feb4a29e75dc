pub(crate) mod helpers;
pub(crate) mod predicates;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

pub(crate) use rules::{day_of_month, integer_stem, year};
