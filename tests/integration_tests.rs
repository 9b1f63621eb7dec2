use chrono::{NaiveDate, TimeZone, Utc};
use feedback_rater::analyzers::aggregate::{AggregateOptions, aggregate_with};
use feedback_rater::analyzers::filter::FeedbackFilter;
use feedback_rater::analyzers::types::{FeedbackRecord, Sentiment};
use feedback_rater::store::{append_feedback, list_clients, load_feedback};
use feedback_rater::{AnalysisError, aggregate_statistics};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/feedback.csv");

#[test]
fn test_full_report_from_store() {
    let records = load_feedback(FIXTURE).expect("Failed to load fixture");
    assert_eq!(records.len(), 9);
    assert_eq!(
        records[0].submitted_at,
        Utc.with_ymd_and_hms(2024, 5, 29, 8, 15, 0).unwrap()
    );

    let report = aggregate_statistics(&records, 10).unwrap();

    assert_eq!(report.total_count, 9);
    assert_eq!(report.average_rating, 3.56);

    let ratings: Vec<_> = report
        .rating_distribution
        .iter()
        .map(|r| (r.rating, r.count))
        .collect();
    assert_eq!(ratings, vec![(1, 1), (2, 1), (3, 2), (4, 2), (5, 3)]);

    let sentiments: Vec<_> = report
        .sentiment_distribution
        .iter()
        .map(|s| (s.sentiment, s.count))
        .collect();
    assert_eq!(
        sentiments,
        vec![
            (Some(Sentiment::Positive), 4),
            (Some(Sentiment::Negative), 2),
            (Some(Sentiment::Neutral), 2),
            (None, 1),
        ]
    );

    let keywords: Vec<_> = report
        .top_keywords
        .iter()
        .take(3)
        .map(|k| (k.keyword.as_str(), k.count))
        .collect();
    assert_eq!(keywords, vec![("support", 3), ("delivery", 3), ("slow", 2)]);

    assert_eq!(report.recent_feedback.len(), 9);
    assert_eq!(report.recent_feedback[0].customer_name, "Sam");
    assert_eq!(report.recent_feedback[2].customer_name, "Anonymous");

    let trend = report.weekly_trend.expect("trend for nine records");
    let weeks: Vec<_> = trend
        .iter()
        .map(|w| (w.week.as_str(), w.average_rating))
        .collect();
    assert_eq!(
        weeks,
        vec![
            ("2024-W18", 5.0),
            ("2024-W19", 3.0),
            ("2024-W20", 2.5),
            ("2024-W21", 4.5),
            ("2024-W22", 3.5),
        ]
    );
    assert_eq!(
        trend[0].week_start,
        NaiveDate::from_ymd_opt(2024, 4, 29).unwrap()
    );
}

#[test]
fn test_client_scoped_report() {
    let records = load_feedback(FIXTURE).unwrap();
    let filter = FeedbackFilter::for_client("acme");

    let report = aggregate_with(filter.apply(&records), &AggregateOptions::default())
        .unwrap()
        .with_context(filter.context_label(&records));

    assert_eq!(report.context.as_deref(), Some("Acme Corp"));
    assert_eq!(report.total_count, 5);
    assert_eq!(report.average_rating, 3.6);
    assert!(report.weekly_trend.is_none());

    let clients = list_clients(&records);
    let ids: Vec<_> = clients.iter().map(|c| c.client_id.as_str()).collect();
    assert_eq!(ids, vec!["globex", "acme"]);
}

#[test]
fn test_submit_then_report() {
    let path = std::env::temp_dir().join("feedback_rater_integration_store.csv");
    let _ = std::fs::remove_file(&path);

    let submissions = [
        (5, "Great onboarding, great docs"),
        (1, "Awful billing problem"),
        (3, ""),
    ];
    for (day, (rating, comment)) in submissions.iter().enumerate() {
        let at = Utc.with_ymd_and_hms(2024, 9, 2 + day as u32, 12, 0, 0).unwrap();
        let mut record = FeedbackRecord::new("initech", *rating, *comment, at).unwrap();
        record.analyze().unwrap();
        append_feedback(&path, &record).unwrap();
    }

    let records = load_feedback(&path).unwrap();
    assert_eq!(records[0].rating, Some(3));
    assert_eq!(records[0].sentiment, None);
    assert_eq!(records[1].sentiment, Some(Sentiment::Negative));
    assert_eq!(records[2].keywords, vec!["great", "onboarding", "docs"]);

    let report = aggregate_statistics(&records, 10).unwrap();
    assert_eq!(report.average_rating, 3.0);
    assert_eq!(report.top_keywords[0].keyword, "awful");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_malformed_record_fails_aggregation() {
    let mut records = load_feedback(FIXTURE).unwrap();
    records[4].rating = None;

    match aggregate_statistics(&records, 10) {
        Err(AnalysisError::DataError { index, .. }) => assert_eq!(index, 4),
        other => panic!("expected DataError, got {other:?}"),
    }
}
