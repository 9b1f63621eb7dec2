//! Report and export serialization.
//!
//! Supports logging reports, writing pretty JSON files, and gzip-compressed
//! feedback exports.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::{FeedbackRecord, StatisticsReport};

/// Snapshot of feedback records as handed to downstream tooling.
#[derive(Debug, Serialize)]
pub struct FeedbackExport {
    pub data: Vec<FeedbackRecord>,
    pub count: usize,
    pub exported_at: DateTime<Utc>,
}

/// Bundles records into an export stamped with `now`.
pub fn export_feedback<'a, I>(records: I, now: DateTime<Utc>) -> FeedbackExport
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let data: Vec<FeedbackRecord> = records.into_iter().cloned().collect();
    FeedbackExport {
        count: data.len(),
        data,
        exported_at: now,
    }
}

/// Logs a report as pretty-printed JSON.
pub fn print_report(report: &StatisticsReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes `value` as pretty-printed JSON to `path`, creating parent
/// directories as needed.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    debug!(path = %path.display(), "Wrote JSON");
    Ok(())
}

/// Writes an export as JSON, gzip-compressed when `gzip` is set.
pub fn write_export(path: impl AsRef<Path>, export: &FeedbackExport, gzip: bool) -> Result<()> {
    let path = path.as_ref();
    if !gzip {
        return write_json(path, export);
    }

    ensure_parent(path)?;
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer(&mut encoder, export)?;
    encoder.finish()?.flush()?;

    debug!(path = %path.display(), count = export.count, "Wrote gzip export");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
