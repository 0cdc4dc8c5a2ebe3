pub mod models;

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::sentiment::Sentiment;
use models::{RawComment, ScoredComment};

/// Stage-1 columns, in file order.
pub const RAW_COLUMNS: [&str; 4] = ["author_name", "likes", "reply_count", "comment_text"];

/// Stage-2 columns, in file order.
pub const SCORED_COLUMNS: [&str; 9] = [
    "author_name",
    "sentiment",
    "compound_score",
    "positive_score",
    "negative_score",
    "neutral_score",
    "likes",
    "reply_count",
    "comment_text",
];

/// Comments read back from a stage-1 file.
#[derive(Debug, Default)]
pub struct LoadedComments {
    pub comments: Vec<RawComment>,
    /// Rows that could not be parsed at all (e.g. wrong field count).
    pub skipped_rows: usize,
}

/// Write collected comments to `path` (stage-1 schema).
pub fn write_comments(path: &Path, comments: &[RawComment]) -> Result<(), PipelineError> {
    write_atomic(path, comments.iter())?;
    info!("Wrote {} comments to {}", comments.len(), path.display());
    Ok(())
}

/// Write scored comments to `path` (stage-2 schema). Scores are rounded to
/// four decimals in the file only.
pub fn write_scored(path: &Path, scored: &[ScoredComment]) -> Result<(), PipelineError> {
    write_atomic(path, scored.iter().map(ScoredRow::from))?;
    info!("Wrote {} scored comments to {}", scored.len(), path.display());
    Ok(())
}

/// Read a stage-1 file.
///
/// The header must name all four stage-1 columns (any order). Unparseable
/// numbers default to 0; rows with the wrong number of fields are skipped and
/// counted.
pub fn read_comments(path: &Path) -> Result<LoadedComments, PipelineError> {
    let missing = |reason: String| PipelineError::InputMissing {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = csv::Reader::from_path(path).map_err(|e| missing(e.to_string()))?;
    let headers = reader.headers().map_err(|e| missing(e.to_string()))?.clone();
    if let Some(col) = RAW_COLUMNS.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(missing(format!("missing column `{col}`")));
    }

    let mut loaded = LoadedComments::default();
    for (i, record) in reader.deserialize::<LooseRow>().enumerate() {
        match record {
            Ok(row) => loaded.comments.push(row.into()),
            Err(e) => {
                // Line 1 is the header.
                debug!("Skipping row {} of {}: {e}", i + 2, path.display());
                loaded.skipped_rows += 1;
            }
        }
    }

    info!("Loaded {} comments from {}", loaded.comments.len(), path.display());
    Ok(loaded)
}

/// Serialize every row into a temp file next to `path`, then move it into
/// place. A failed write leaves any existing file untouched.
fn write_atomic<I, T>(path: &Path, rows: I) -> Result<(), PipelineError>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let fail = |source: io::Error| PipelineError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(fail)?;

    let mut writer = csv::Writer::from_writer(tmp);
    for row in rows {
        writer.serialize(row).map_err(|e| fail(e.into()))?;
    }
    let tmp = writer.into_inner().map_err(|e| fail(e.into_error()))?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}

/// Stage-1 row as read from disk, before defaults are applied.
#[derive(Debug, Deserialize)]
struct LooseRow {
    #[serde(default)]
    author_name: String,
    #[serde(default)]
    likes: String,
    #[serde(default)]
    reply_count: String,
    #[serde(default)]
    comment_text: String,
}

impl From<LooseRow> for RawComment {
    fn from(row: LooseRow) -> Self {
        RawComment {
            author_name: row.author_name,
            likes: parse_count(&row.likes),
            reply_count: parse_count(&row.reply_count),
            comment_text: row.comment_text,
        }
    }
}

fn parse_count(field: &str) -> u64 {
    field.trim().parse().unwrap_or(0)
}

#[derive(Debug, Serialize)]
struct ScoredRow<'a> {
    author_name: &'a str,
    sentiment: Sentiment,
    compound_score: f64,
    positive_score: f64,
    negative_score: f64,
    neutral_score: f64,
    likes: u64,
    reply_count: u64,
    comment_text: &'a str,
}

impl<'a> From<&'a ScoredComment> for ScoredRow<'a> {
    fn from(s: &'a ScoredComment) -> Self {
        ScoredRow {
            author_name: &s.comment.author_name,
            sentiment: s.sentiment,
            compound_score: round4(s.scores.compound),
            positive_score: round4(s.scores.positive),
            negative_score: round4(s.scores.negative),
            neutral_score: round4(s.scores.neutral),
            likes: s.comment.likes,
            reply_count: s.comment.reply_count,
            comment_text: &s.comment.comment_text,
        }
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
