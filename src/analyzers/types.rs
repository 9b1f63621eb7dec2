//! Data types used by the analysis pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analyzers::keywords::{DEFAULT_MAX_KEYWORDS, extract_keywords};
use crate::analyzers::rating::is_valid_rating;
use crate::analyzers::sentiment::classify_sentiment;
use crate::error::{AnalysisError, Result};

/// Sentiment label derived from a comment and its star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(format!(
                "unknown sentiment '{other}', expected positive, neutral or negative"
            )),
        }
    }
}

/// A single piece of customer feedback tied to a client account.
///
/// `sentiment` and `keywords` are derived fields: they are filled in once by
/// [`FeedbackRecord::analyze`] and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub client_id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: String,
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Builds a new, not yet analyzed record.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidRating`] if `rating` is outside 1..=5.
    pub fn new(
        client_id: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !is_valid_rating(rating) {
            return Err(AnalysisError::InvalidRating(rating));
        }

        Ok(FeedbackRecord {
            client_id: client_id.into(),
            client_name: String::new(),
            customer_name: String::new(),
            customer_email: String::new(),
            rating: Some(rating),
            comment: comment.into(),
            sentiment: None,
            keywords: Vec::new(),
            submitted_at,
        })
    }

    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    pub fn with_customer(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self.customer_email = email.into();
        self
    }

    /// Whether the derived fields still need to be computed.
    pub fn needs_analysis(&self) -> bool {
        !self.comment.is_empty() && self.sentiment.is_none()
    }

    /// Fills in `sentiment` and `keywords` when the comment is non-empty and
    /// the record has not been analyzed yet. Already analyzed records are
    /// left untouched. Returns whether anything was written.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::DataError`] if the record has no rating, or
    /// [`AnalysisError::InvalidRating`] if the rating is out of range. A
    /// single record is analyzed, so the `DataError` position is always 0.
    pub fn analyze(&mut self) -> Result<bool> {
        self.analyze_with(DEFAULT_MAX_KEYWORDS)
    }

    /// [`FeedbackRecord::analyze`] with an explicit keyword limit.
    pub fn analyze_with(&mut self, max_keywords: usize) -> Result<bool> {
        if !self.needs_analysis() {
            return Ok(false);
        }

        let rating = self
            .rating
            .ok_or_else(|| AnalysisError::data(0, "missing rating"))?;

        self.sentiment = Some(classify_sentiment(&self.comment, rating)?);
        self.keywords = extract_keywords(&self.comment, max_keywords);
        Ok(true)
    }

    /// Customer name for display, `"Anonymous"` when none was given.
    pub fn display_name(&self) -> &str {
        if self.customer_name.is_empty() {
            "Anonymous"
        } else {
            &self.customer_name
        }
    }
}

/// Count of records per star rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    pub rating: u8,
    pub count: usize,
}

/// Count of records per sentiment. `None` groups records never analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Option<Sentiment>,
    pub count: usize,
}

/// Projection of a record shown in the "recent feedback" panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentFeedback {
    pub rating: u8,
    pub comment: String,
    pub customer_name: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Mean rating for one ISO calendar week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyRating {
    /// ISO week label, e.g. `2024-W07`.
    pub week: String,
    /// Monday of the ISO week.
    pub week_start: NaiveDate,
    pub average_rating: f64,
    pub count: usize,
}

/// Aggregated analytics over a collection of feedback records.
///
/// Built fresh for every request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub total_count: usize,
    pub average_rating: f64,
    pub rating_distribution: Vec<RatingCount>,
    pub sentiment_distribution: Vec<SentimentCount>,
    pub recent_feedback: Vec<RecentFeedback>,
    pub top_keywords: Vec<KeywordCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_trend: Option<Vec<WeeklyRating>>,
}

impl StatisticsReport {
    /// The zero-valued report returned for an empty collection.
    pub fn empty() -> Self {
        StatisticsReport {
            context: None,
            total_count: 0,
            average_rating: 0.0,
            rating_distribution: Vec::new(),
            sentiment_distribution: Vec::new(),
            recent_feedback: Vec::new(),
            top_keywords: Vec::new(),
            weekly_trend: None,
        }
    }

    /// Labels the report with the scope it was computed for.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
