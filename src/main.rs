//! CLI entry point for the feedback rater.
//!
//! Provides subcommands for submitting feedback into a CSV store, analyzing
//! single comments, listing and exporting stored feedback, and building
//! per-client analytics reports.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use feedback_rater::analyzers::aggregate::aggregate_with;
use feedback_rater::analyzers::filter::FeedbackFilter;
use feedback_rater::analyzers::keywords::extract_keywords;
use feedback_rater::analyzers::rating::rating_label;
use feedback_rater::analyzers::sentiment::{classify_sentiment, count_signal};
use feedback_rater::analyzers::types::{FeedbackRecord, Sentiment};
use feedback_rater::config::Settings;
use feedback_rater::output::{export_feedback, print_report, write_export, write_json};
use feedback_rater::store::{append_feedback, list_clients, load_feedback};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "feedback_rater")]
#[command(about = "Sentiment, keyword and rating analytics for customer feedback", long_about = None)]
struct Cli {
    /// JSON settings file with analysis tunables
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new piece of feedback, deriving sentiment and keywords
    Submit {
        /// CSV store to append to
        #[arg(short, long, default_value = "feedback.csv")]
        store: PathBuf,

        /// Client account the feedback belongs to
        #[arg(long)]
        client: String,

        /// Display name of the client account
        #[arg(long, default_value = "")]
        client_name: String,

        /// Star rating, 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Free-text comment
        #[arg(short, long, default_value = "")]
        comment: String,

        #[arg(long, default_value = "")]
        customer_name: String,

        #[arg(long, default_value = "")]
        customer_email: String,
    },
    /// Classify a comment without storing it
    Analyze {
        #[arg(value_name = "COMMENT")]
        comment: String,

        /// Star rating, 1 to 5
        #[arg(short, long)]
        rating: u8,
    },
    /// List stored feedback, newest first
    List {
        #[arg(short, long, default_value = "feedback.csv")]
        store: PathBuf,

        #[arg(long)]
        client: Option<String>,

        #[arg(long)]
        rating: Option<u8>,

        /// positive, neutral or negative
        #[arg(long)]
        sentiment: Option<Sentiment>,

        /// Maximum number of rows to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// List client accounts with their feedback counts
    Clients {
        #[arg(short, long, default_value = "feedback.csv")]
        store: PathBuf,
    },
    /// Build an analytics report for one client or for all feedback
    Report {
        #[arg(short, long, default_value = "feedback.csv")]
        store: PathBuf,

        /// Restrict the report to one client
        #[arg(long)]
        client: Option<String>,

        /// Write the report to this JSON file instead of logging it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Build one report per client concurrently, plus an all-clients report
    ReportAll {
        #[arg(short, long, default_value = "feedback.csv")]
        store: PathBuf,

        /// Directory to write `<client_id>.json` reports into
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,

        /// Maximum number of reports computed at once
        #[arg(short, long, default_value_t = 4)]
        concurrency: usize,
    },
    /// Export stored feedback as JSON
    Export {
        #[arg(short, long, default_value = "feedback.csv")]
        store: PathBuf,

        #[arg(long)]
        client: Option<String>,

        #[arg(short, long, default_value = "export.json")]
        out: PathBuf,

        /// Gzip compress the export
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _file_guard = init_logging()?;

    let cli = Cli::parse();
    let settings = Settings::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Submit {
            store,
            client,
            client_name,
            rating,
            comment,
            customer_name,
            customer_email,
        } => {
            let mut record = FeedbackRecord::new(client, rating, comment, Utc::now())?
                .with_client_name(client_name)
                .with_customer(customer_name, customer_email);
            record.analyze_with(settings.max_keywords)?;

            append_feedback(&store, &record)?;
            info!(
                client_id = %record.client_id,
                rating,
                sentiment = record.sentiment.map(|s| s.as_str()).unwrap_or("unset"),
                keywords = ?record.keywords,
                "Feedback recorded"
            );
        }
        Commands::Analyze { comment, rating } => {
            let sentiment = classify_sentiment(&comment, rating)?;
            let signal = count_signal(&comment);
            let keywords = extract_keywords(&comment, settings.max_keywords);

            info!(
                %sentiment,
                positive_words = signal.positive,
                negative_words = signal.negative,
                keywords = ?keywords,
                "Comment analyzed"
            );
        }
        Commands::List {
            store,
            client,
            rating,
            sentiment,
            limit,
        } => {
            let records = load_feedback(&store)?;
            let filter = FeedbackFilter {
                client,
                rating,
                sentiment,
            };
            let matching = filter.apply(&records);

            info!(total = records.len(), matching = matching.len(), "Feedback list loaded");

            for record in matching.iter().take(limit) {
                info!(
                    client = %record.client_id,
                    customer = record.display_name(),
                    rating = record.rating.map(rating_label).unwrap_or("Unrated"),
                    sentiment = record.sentiment.map(|s| s.as_str()).unwrap_or("unset"),
                    submitted_at = %record.submitted_at,
                    comment = %record.comment,
                    "Feedback"
                );
            }
        }
        Commands::Clients { store } => {
            let records = load_feedback(&store)?;
            for client in list_clients(&records) {
                info!(
                    client_id = %client.client_id,
                    client_name = %client.client_name,
                    feedback_count = client.feedback_count,
                    "Client"
                );
            }
        }
        Commands::Report { store, client, out } => {
            let records = load_feedback(&store)?;
            let filter = FeedbackFilter {
                client,
                ..Default::default()
            };
            let report = aggregate_with(filter.apply(&records), &settings.aggregate)?
                .with_context(filter.context_label(&records));

            match out {
                Some(path) => {
                    write_json(&path, &report)?;
                    info!(path = %path.display(), total = report.total_count, "Report written");
                }
                None => print_report(&report)?,
            }
        }
        Commands::ReportAll {
            store,
            output_dir,
            concurrency,
        } => {
            report_all(&store, &output_dir, concurrency, &settings).await?;
        }
        Commands::Export {
            store,
            client,
            out,
            gzip,
        } => {
            let records = load_feedback(&store)?;
            let filter = FeedbackFilter {
                client,
                ..Default::default()
            };
            let export = export_feedback(filter.apply(&records), Utc::now());
            write_export(&out, &export, gzip)?;
            info!(path = %out.display(), count = export.count, gzip, "Feedback exported");
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/feedback_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("feedback_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

/// Writes one report per client plus `all.json`, computing at most
/// `concurrency` reports at a time.
#[tracing::instrument(
    skip(store, output_dir, settings),
    fields(store = %store.display(), output_dir = %output_dir.display(), concurrency)
)]
async fn report_all(
    store: &Path,
    output_dir: &Path,
    concurrency: usize,
    settings: &Settings,
) -> Result<()> {
    let records = Arc::new(load_feedback(store)?);
    let clients = list_clients(&records);
    info!(client_count = clients.len(), "Building per-client reports");

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let semaphore = Arc::new(tokio::sync::Semaphore::new(concurrency.max(1)));
    let mut tasks = Vec::new();

    let scopes = clients
        .into_iter()
        .map(|c| (FeedbackFilter::for_client(&c.client_id), c.client_id))
        .chain(std::iter::once((FeedbackFilter::default(), "all".to_string())));

    for (filter, file_stem) in scopes {
        let sem = semaphore.clone();
        let records = records.clone();
        let options = settings.aggregate.clone();
        let path = output_dir.join(format!("{file_stem}.json"));

        tasks.push(tokio::spawn(async move {
            let _permit = sem.acquire_owned().await?;
            let report = tokio::task::spawn_blocking(move || {
                aggregate_with(filter.apply(&records), &options)
                    .map(|r| r.with_context(filter.context_label(&records)))
            })
            .await??;

            write_json(&path, &report)?;
            info!(path = %path.display(), total = report.total_count, "Report written");
            anyhow::Ok(())
        }));
    }

    let mut failures = 0usize;
    for task in tasks {
        match task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                failures += 1;
                error!(error = %e, "Report failed");
            }
            Err(e) => {
                failures += 1;
                error!(error = %e, "Report task panicked");
            }
        }
    }

    if failures > 0 {
        warn!(failures, "Some reports could not be built");
        anyhow::bail!("{failures} report(s) failed");
    }

    info!("Finished building reports");
    Ok(())
}
