//! Raw text to normalized word tokens.
//!
//! Tokens are whitespace-separated words with every character outside
//! `[A-Za-z0-9/-]` removed and the rest lowercased. Words that normalize to
//! nothing are dropped. The engine never re-normalizes what it is given.

/// Split `text` into normalized tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(normalize_word).filter(|w| !w.is_empty()).collect()
}

/// Normalize a single word: strip punctuation, lowercase.
pub fn normalize_word(word: &str) -> String {
    regex!(r"[^A-Za-z0-9/-]+").replace_all(word, "").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_lowercases() {
        assert_eq!(normalize_word("THIS...."), "this");
        assert_eq!(normalize_word("June,"), "june");
        assert_eq!(normalize_word("2015-06-01"), "2015-06-01");
        assert_eq!(normalize_word("6/1"), "6/1");
    }

    #[test]
    fn tokenize_drops_empty_words() {
        assert_eq!(tokenize("  Next  ...  Tuesday! "), vec!["next", "tuesday"]);
        assert!(tokenize("?? !!").is_empty());
    }
}
