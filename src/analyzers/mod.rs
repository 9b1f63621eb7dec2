//! Feedback analysis and aggregation.
//!
//! Comments are tokenized once, fed to the sentiment classifier and the
//! keyword extractor, and the derived fields are stored on the record. The
//! aggregator later folds many records into a [`types::StatisticsReport`].

pub mod aggregate;
pub mod filter;
pub mod keywords;
pub mod normalize;
pub mod rating;
pub mod sentiment;
pub mod trend;
pub mod types;
pub mod utility;
pub mod vocabulary;
