//! Frequency-ranked keyword extraction.

use std::collections::HashMap;
use std::hash::Hash;

use crate::analyzers::normalize::keyword_candidates;
use crate::analyzers::vocabulary::is_stop_word;

pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Counts items and returns the `limit` most frequent, highest count first.
///
/// Items with equal counts keep the order in which they were first seen.
/// The sort key carries the first-occurrence index explicitly so the result
/// does not depend on sort stability.
pub fn rank_by_frequency<K, I>(items: I, limit: usize) -> Vec<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    // item -> (first index, count)
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();

    for (index, item) in items.into_iter().enumerate() {
        counts.entry(item).or_insert((index, 0)).1 += 1;
    }

    let mut ranked: Vec<(K, usize, usize)> = counts
        .into_iter()
        .map(|(item, (first, count))| (item, first, count))
        .collect();

    ranked.sort_unstable_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(item, _, count)| (item, count))
        .collect()
}

/// Extracts up to `max_keywords` distinct keywords from a comment, most
/// frequent first.
///
/// Only alphabetic tokens of three or more letters that are not stop words
/// are considered. Never fails: text without usable words yields an empty
/// list.
pub fn extract_keywords(comment: &str, max_keywords: usize) -> Vec<String> {
    let candidates = keyword_candidates(comment)
        .into_iter()
        .filter(|token| !is_stop_word(token));

    rank_by_frequency(candidates, max_keywords)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_removed() {
        assert_eq!(
            extract_keywords("The the the cat cat dog", 10),
            vec!["cat", "dog"]
        );
    }

    #[test]
    fn test_short_and_numeric_tokens_excluded() {
        assert_eq!(extract_keywords("I am ok at 42 things", 10), vec!["things"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        assert_eq!(
            extract_keywords("zebra apple mango apple zebra kiwi", 10),
            vec!["zebra", "apple", "mango", "kiwi"]
        );
    }

    #[test]
    fn test_limit_applied_after_ranking() {
        assert_eq!(
            extract_keywords("delivery late, delivery slow, refund refund refund", 2),
            vec!["refund", "delivery"]
        );
    }

    #[test]
    fn test_underscored_words_excluded() {
        assert_eq!(extract_keywords("arrived_late here", 10), vec!["here"]);
    }

    #[test]
    fn test_zero_limit_and_empty_input() {
        assert!(extract_keywords("useful words here", 0).is_empty());
        assert!(extract_keywords("", 10).is_empty());
        assert!(extract_keywords("!!! ... 123", 10).is_empty());
    }

    #[test]
    fn test_rank_by_frequency_counts() {
        let ranked = rank_by_frequency(["b", "a", "b", "c", "a", "b"], 10);
        assert_eq!(ranked, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_deterministic() {
        let comment = "Checkout flow confusing, checkout button hidden, support helpful";
        let first = extract_keywords(comment, 10);
        for _ in 0..10 {
            assert_eq!(extract_keywords(comment, 10), first);
        }
    }
}
