//! Error types raised by the analysis core.

use thiserror::Error;

/// Per-call failures returned by the classifier and the aggregator.
///
/// Neither kind is fatal; the caller decides whether to filter its input and
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A rating outside the 1..=5 star range reached the classifier.
    #[error("invalid rating {0}: expected a value between 1 and 5")]
    InvalidRating(u8),

    /// A record is missing a required field or carries a malformed one.
    /// `index` is the record's position in the aggregator input, or 0 when a
    /// single record is analyzed.
    #[error("malformed feedback record at position {index}: {reason}")]
    DataError { index: usize, reason: String },
}

impl AnalysisError {
    pub(crate) fn data(index: usize, reason: impl Into<String>) -> Self {
        AnalysisError::DataError {
            index,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
