//! CSV-backed feedback storage.
//!
//! Each row holds one [`FeedbackRecord`]. Keywords are kept in a single
//! column joined with `;`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::{FeedbackRecord, Sentiment};

const KEYWORD_SEPARATOR: &str = ";";

/// On-disk layout of a feedback row.
#[derive(Debug, Serialize, Deserialize)]
struct FeedbackRow {
    client_id: String,
    client_name: String,
    customer_name: String,
    customer_email: String,
    rating: Option<u8>,
    comment: String,
    sentiment: Option<Sentiment>,
    keywords: String,
    submitted_at: DateTime<Utc>,
}

impl From<&FeedbackRecord> for FeedbackRow {
    fn from(record: &FeedbackRecord) -> Self {
        FeedbackRow {
            client_id: record.client_id.clone(),
            client_name: record.client_name.clone(),
            customer_name: record.customer_name.clone(),
            customer_email: record.customer_email.clone(),
            rating: record.rating,
            comment: record.comment.clone(),
            sentiment: record.sentiment,
            keywords: record.keywords.join(KEYWORD_SEPARATOR),
            submitted_at: record.submitted_at,
        }
    }
}

impl From<FeedbackRow> for FeedbackRecord {
    fn from(row: FeedbackRow) -> Self {
        FeedbackRecord {
            client_id: row.client_id,
            client_name: row.client_name,
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            rating: row.rating,
            comment: row.comment,
            sentiment: row.sentiment,
            keywords: row
                .keywords
                .split(KEYWORD_SEPARATOR)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
            submitted_at: row.submitted_at,
        }
    }
}

/// Appends a [`FeedbackRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_feedback(path: impl AsRef<Path>, record: &FeedbackRecord) -> Result<()> {
    let path = path.as_ref();
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending feedback row");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open feedback store {}", path.display()))?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(FeedbackRow::from(record))?;
    writer.flush()?;

    Ok(())
}

/// Reads every record from a CSV store, newest first.
///
/// A missing file is treated as an empty store.
pub fn load_feedback(path: impl AsRef<Path>) -> Result<Vec<FeedbackRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "Feedback store does not exist yet");
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .with_context(|| format!("failed to open feedback store {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut records = Vec::new();

    for (line, result) in rdr.deserialize().enumerate() {
        let row: FeedbackRow =
            result.with_context(|| format!("bad feedback row {} in {}", line + 1, path.display()))?;
        records.push(FeedbackRecord::from(row));
    }

    // Stable sort keeps file order among equal timestamps.
    records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    debug!(count = records.len(), "Loaded feedback records");

    Ok(records)
}

/// One client account seen in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    pub client_id: String,
    pub client_name: String,
    pub feedback_count: usize,
}

/// Distinct clients in `records`, in order of first appearance.
pub fn list_clients(records: &[FeedbackRecord]) -> Vec<ClientSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut clients: Vec<ClientSummary> = Vec::new();

    for record in records {
        match index.get(record.client_id.as_str()) {
            Some(&i) => {
                let client = &mut clients[i];
                client.feedback_count += 1;
                if client.client_name.is_empty() {
                    client.client_name = record.client_name.clone();
                }
            }
            None => {
                index.insert(&record.client_id, clients.len());
                clients.push(ClientSummary {
                    client_id: record.client_id.clone(),
                    client_name: record.client_name.clone(),
                    feedback_count: 1,
                });
            }
        }
    }

    clients
}
