//! Text normalization shared by the classifier and the keyword extractor.

use regex::Regex;
use std::sync::LazyLock;

/// A maximal run of word characters: letters, digits and underscores.
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Minimum length of a keyword candidate.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Lowercases `text` and splits it into word tokens.
///
/// Punctuation and whitespace are discarded. No stemming and no locale
/// handling beyond Unicode lowercasing.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens eligible for keyword extraction: purely ASCII alphabetic and at
/// least [`MIN_KEYWORD_LEN`] characters long. Tokens holding digits or
/// underscores are dropped whole.
pub fn keyword_candidates(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.len() >= MIN_KEYWORD_LEN && t.bytes().all(|b| b.is_ascii_alphabetic()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ...!?  ").is_empty());
    }

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Great service, GREAT price!!"),
            vec!["great", "service", "great", "price"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscores() {
        assert_eq!(tokenize("order #42 arrived_late"), vec!["order", "42", "arrived_late"]);
    }

    #[test]
    fn test_tokenize_apostrophes_split_words() {
        assert_eq!(tokenize("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_keyword_candidates_filters_short_and_numeric() {
        assert_eq!(
            keyword_candidates("I am ok at 42 things, v2 abc123"),
            vec!["things"]
        );
    }

    #[test]
    fn test_keyword_candidates_drops_underscored_words() {
        assert_eq!(keyword_candidates("arrived_late here"), vec!["here"]);
    }

    #[test]
    fn test_keyword_candidates_rejects_non_ascii_words() {
        assert_eq!(keyword_candidates("café latte"), vec!["latte"]);
    }
}
