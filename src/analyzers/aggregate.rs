use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::analyzers::keywords::{DEFAULT_MAX_KEYWORDS, rank_by_frequency};
use crate::analyzers::rating::is_valid_rating;
use crate::analyzers::trend::weekly_trend;
use crate::analyzers::types::{
    FeedbackRecord, KeywordCount, RatingCount, RecentFeedback, SentimentCount, StatisticsReport,
};
use crate::analyzers::utility::{round2, truncate_chars};
use crate::error::{AnalysisError, Result};

/// Tunables for [`aggregate_with`]. Every field falls back to its default
/// when deserialized from a partial settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AggregateOptions {
    /// Number of entries kept in `top_keywords`.
    pub top_keywords: usize,
    /// Number of entries kept in `recent_feedback`.
    pub recent_limit: usize,
    /// Comments longer than this are cut in `recent_feedback`.
    pub comment_excerpt_chars: usize,
    /// The weekly trend is only computed above this many records.
    pub trend_min_records: usize,
    /// Number of most recent weeks kept in the trend.
    pub trend_weeks: usize,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        AggregateOptions {
            top_keywords: DEFAULT_MAX_KEYWORDS,
            recent_limit: 10,
            comment_excerpt_chars: 100,
            trend_min_records: 7,
            trend_weeks: 8,
        }
    }
}

/// Folds feedback records into a [`StatisticsReport`] using default options
/// and the given top-keyword limit.
///
/// See [`aggregate_with`].
pub fn aggregate_statistics(
    records: &[FeedbackRecord],
    max_keywords: usize,
) -> Result<StatisticsReport> {
    let options = AggregateOptions {
        top_keywords: max_keywords,
        ..Default::default()
    };
    aggregate_with(records, &options)
}

/// Folds feedback records into a [`StatisticsReport`].
///
/// Records are expected newest first; `recent_feedback` takes the leading
/// records as given without re-sorting. Input is never mutated. An empty
/// collection yields [`StatisticsReport::empty`].
///
/// # Errors
///
/// [`AnalysisError::DataError`] if any record has no rating or a rating
/// outside 1..=5. No partial report is produced.
#[tracing::instrument(skip_all, fields(top_keywords = options.top_keywords))]
pub fn aggregate_with<'a, I>(records: I, options: &AggregateOptions) -> Result<StatisticsReport>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let rated = validate(records)?;

    if rated.is_empty() {
        debug!("No feedback records, returning empty report");
        return Ok(StatisticsReport::empty());
    }

    let total_count = rated.len();
    let rating_sum: u64 = rated.iter().map(|(rating, _)| *rating as u64).sum();
    let average_rating = round2(rating_sum as f64 / total_count as f64);

    let mut by_rating: BTreeMap<u8, usize> = BTreeMap::new();
    for (rating, _) in &rated {
        *by_rating.entry(*rating).or_default() += 1;
    }
    let rating_distribution = by_rating
        .into_iter()
        .map(|(rating, count)| RatingCount { rating, count })
        .collect();

    let sentiments = rated.iter().map(|(_, r)| r.sentiment);
    let sentiment_distribution = rank_by_frequency(sentiments, usize::MAX)
        .into_iter()
        .map(|(sentiment, count)| SentimentCount { sentiment, count })
        .collect();

    let recent_feedback = rated
        .iter()
        .take(options.recent_limit)
        .map(|(rating, r)| RecentFeedback {
            rating: *rating,
            comment: truncate_chars(&r.comment, options.comment_excerpt_chars),
            customer_name: r.display_name().to_string(),
            submitted_at: r.submitted_at,
        })
        .collect();

    let all_keywords = rated
        .iter()
        .flat_map(|(_, r)| r.keywords.iter().map(String::as_str));
    let top_keywords = rank_by_frequency(all_keywords, options.top_keywords)
        .into_iter()
        .map(|(keyword, count)| KeywordCount {
            keyword: keyword.to_string(),
            count,
        })
        .collect();

    let weekly_trend = if total_count > options.trend_min_records {
        Some(weekly_trend(
            rated.iter().map(|(rating, r)| (r.submitted_at, *rating)),
            options.trend_weeks,
        ))
    } else {
        None
    };

    debug!(total_count, average_rating, "Aggregated feedback statistics");

    Ok(StatisticsReport {
        context: None,
        total_count,
        average_rating,
        rating_distribution,
        sentiment_distribution,
        recent_feedback,
        top_keywords,
        weekly_trend,
    })
}

/// Pairs every record with its rating, failing on the first malformed one.
fn validate<'a, I>(records: I) -> Result<Vec<(u8, &'a FeedbackRecord)>>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record.rating {
            None => Err(AnalysisError::data(index, "missing rating")),
            Some(rating) if !is_valid_rating(rating) => Err(AnalysisError::data(
                index,
                format!("rating {rating} outside 1..=5"),
            )),
            Some(rating) => Ok((rating, record)),
        })
        .collect()
}
