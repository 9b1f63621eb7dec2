//! ISO-week rating trend.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::analyzers::types::WeeklyRating;
use crate::analyzers::utility::{mean, round2};

/// Buckets `(submitted_at, rating)` samples by ISO calendar week and returns
/// the mean rating of the last `weeks` buckets present, oldest first.
///
/// Weeks with no samples are skipped rather than reported as zero.
pub fn weekly_trend<I>(samples: I, weeks: usize) -> Vec<WeeklyRating>
where
    I: IntoIterator<Item = (DateTime<Utc>, u8)>,
{
    // (iso year, iso week) -> (monday, ratings)
    let mut buckets: BTreeMap<(i32, u32), (NaiveDate, Vec<f64>)> = BTreeMap::new();

    for (submitted_at, rating) in samples {
        let date = submitted_at.date_naive();
        let iso = date.iso_week();
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);

        buckets
            .entry((iso.year(), iso.week()))
            .or_insert_with(|| (monday, Vec::new()))
            .1
            .push(rating as f64);
    }

    let skip = buckets.len().saturating_sub(weeks);

    buckets
        .into_iter()
        .skip(skip)
        .map(|((year, week), (week_start, ratings))| WeeklyRating {
            week: format!("{year}-W{week:02}"),
            week_start,
            average_rating: round2(mean(&ratings)),
            count: ratings.len(),
        })
        .collect()
}
