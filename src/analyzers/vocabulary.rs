//! Fixed English word lists used by the classifier and the keyword extractor.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words counted as positive signal by the sentiment classifier.
pub static POSITIVE_WORDS: &[&str] = &[
    "excellent",
    "amazing",
    "great",
    "fantastic",
    "wonderful",
    "perfect",
    "love",
    "awesome",
    "outstanding",
    "brilliant",
    "superb",
    "impressed",
    "satisfied",
    "happy",
    "pleased",
    "recommend",
    "best",
    "good",
];

/// Words counted as negative signal by the sentiment classifier.
pub static NEGATIVE_WORDS: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "worst",
    "bad",
    "poor",
    "disappointing",
    "frustrated",
    "angry",
    "hate",
    "useless",
    "waste",
    "problem",
    "issues",
    "slow",
    "broken",
    "difficult",
    "confusing",
    "expensive",
];

/// Function words dropped before keyword counting.
pub static STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "this", "that", "these", "those", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
    "very", "really", "quite", "just", "only",
];

static POSITIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());
static NEGATIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());
static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Exact match against [`POSITIVE_WORDS`]. Expects an already lowercased token.
pub fn is_positive(token: &str) -> bool {
    POSITIVE_SET.contains(token)
}

/// Exact match against [`NEGATIVE_WORDS`]. Expects an already lowercased token.
pub fn is_negative(token: &str) -> bool {
    NEGATIVE_SET.contains(token)
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_SET.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_do_not_overlap() {
        for word in POSITIVE_WORDS {
            assert!(!is_negative(word), "{word} is in both sentiment lists");
            assert!(!is_stop_word(word), "{word} is a stop word");
        }
        for word in NEGATIVE_WORDS {
            assert!(!is_stop_word(word), "{word} is a stop word");
        }
    }

    #[test]
    fn test_lookups_are_exact() {
        assert!(is_positive("good"));
        assert!(!is_positive("goods"));
        assert!(!is_positive("Good"));
        assert!(is_negative("issues"));
        assert!(!is_negative("issue"));
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("cat"));
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(POSITIVE_WORDS.len(), 18);
        assert_eq!(NEGATIVE_WORDS.len(), 19);
        assert_eq!(STOP_SET.len(), STOP_WORDS.len());
    }
}
