//! Record scoping applied before listing or aggregation.

use crate::analyzers::types::{FeedbackRecord, Sentiment};

/// Optional constraints on client, rating and sentiment. Unset fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFilter {
    pub client: Option<String>,
    pub rating: Option<u8>,
    pub sentiment: Option<Sentiment>,
}

impl FeedbackFilter {
    pub fn for_client(client: impl Into<String>) -> Self {
        FeedbackFilter {
            client: Some(client.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, record: &FeedbackRecord) -> bool {
        if let Some(client) = &self.client {
            if &record.client_id != client {
                return false;
            }
        }

        if let Some(rating) = self.rating {
            if record.rating != Some(rating) {
                return false;
            }
        }

        if let Some(sentiment) = self.sentiment {
            if record.sentiment != Some(sentiment) {
                return false;
            }
        }

        true
    }

    /// Keeps matching records, preserving their order.
    pub fn apply<'a>(&self, records: &'a [FeedbackRecord]) -> Vec<&'a FeedbackRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Label for reports computed under this filter: the client's display
    /// name when one is known, its id otherwise, or `All Clients`.
    pub fn context_label(&self, records: &[FeedbackRecord]) -> String {
        match &self.client {
            None => "All Clients".to_string(),
            Some(client) => records
                .iter()
                .find(|r| &r.client_id == client && !r.client_name.is_empty())
                .map(|r| r.client_name.clone())
                .unwrap_or_else(|| client.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(client: &str, rating: u8, sentiment: Option<Sentiment>) -> FeedbackRecord {
        let mut r = FeedbackRecord::new(
            client,
            rating,
            "",
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        )
        .unwrap();
        r.sentiment = sentiment;
        r
    }

    #[test]
    fn test_default_matches_everything() {
        let filter = FeedbackFilter::default();
        assert!(filter.matches(&record("acme", 1, None)));
    }

    #[test]
    fn test_combined_constraints() {
        let records = vec![
            record("acme", 5, Some(Sentiment::Positive)),
            record("acme", 2, Some(Sentiment::Negative)),
            record("globex", 5, Some(Sentiment::Positive)),
            record("acme", 5, None),
        ];
        let filter = FeedbackFilter {
            client: Some("acme".to_string()),
            rating: Some(5),
            sentiment: Some(Sentiment::Positive),
        };

        let kept = filter.apply(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], &records[0]);
    }

    #[test]
    fn test_context_label() {
        let records = vec![record("acme", 4, None).with_client_name("Acme Corp")];
        assert_eq!(FeedbackFilter::default().context_label(&records), "All Clients");
        assert_eq!(
            FeedbackFilter::for_client("acme").context_label(&records),
            "Acme Corp"
        );
        assert_eq!(
            FeedbackFilter::for_client("initech").context_label(&records),
            "initech"
        );
    }
}
