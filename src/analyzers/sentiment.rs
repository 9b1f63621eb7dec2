//! Rating-dominant sentiment classification.

use crate::analyzers::normalize::tokenize;
use crate::analyzers::rating::is_valid_rating;
use crate::analyzers::types::Sentiment;
use crate::analyzers::vocabulary::{is_negative, is_positive};
use crate::error::{AnalysisError, Result};

/// Number of positive and negative vocabulary hits in a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentSignal {
    pub positive: usize,
    pub negative: usize,
}

/// Counts exact token matches against the positive and negative word lists.
pub fn count_signal(comment: &str) -> SentimentSignal {
    tokenize(comment)
        .iter()
        .fold(SentimentSignal::default(), |mut signal, token| {
            if is_positive(token) {
                signal.positive += 1;
            } else if is_negative(token) {
                signal.negative += 1;
            }
            signal
        })
}

/// Classifies a comment given its star rating.
///
/// Rules, first match wins:
///
/// | Condition                                  | Label    |
/// |--------------------------------------------|----------|
/// | rating >= 4 and positive > negative        | positive |
/// | rating <= 2 or negative > positive         | negative |
/// | otherwise                                  | neutral  |
///
/// The rule is asymmetric on purpose: a 5-star rating with more negative
/// words than positive ones is labelled negative.
///
/// # Errors
///
/// [`AnalysisError::InvalidRating`] if `rating` is outside 1..=5.
pub fn classify_sentiment(comment: &str, rating: u8) -> Result<Sentiment> {
    if !is_valid_rating(rating) {
        return Err(AnalysisError::InvalidRating(rating));
    }

    Ok(classify_signal(count_signal(comment), rating))
}

fn classify_signal(signal: SentimentSignal, rating: u8) -> Sentiment {
    if rating >= 4 && signal.positive > signal.negative {
        Sentiment::Positive
    } else if rating <= 2 || signal.negative > signal.positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
