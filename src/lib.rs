pub mod analyzers;
pub mod config;
pub mod error;
pub mod output;
pub mod store;

pub use analyzers::aggregate::aggregate_statistics;
pub use analyzers::keywords::extract_keywords;
pub use analyzers::normalize::tokenize;
pub use analyzers::sentiment::classify_sentiment;
pub use error::AnalysisError;
