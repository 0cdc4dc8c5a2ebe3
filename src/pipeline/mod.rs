use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, info_span, warn};

use crate::analyze::{summarize, Analyzer, SentimentSummary};
use crate::collect::Collector;
use crate::error::PipelineError;
use crate::report::Reporter;
use crate::sentiment::TextSentimentScorer;
use crate::source::{ChannelMatch, CommentSource, VideoDiscovery, VideoMatch};
use crate::store::{self, models::CollectionStats};

/// What to collect comments for.
#[derive(Debug, Clone)]
pub enum VideoTarget {
    /// A known video id; discovery is skipped.
    Video(String),
    /// Latest upload of the first channel matching the query.
    LatestFromChannel(String),
}

/// The video a collection run ended up targeting.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedVideo {
    pub channel: Option<ChannelMatch>,
    /// Every channel the search returned, best match first.
    pub candidates: Vec<ChannelMatch>,
    pub video: VideoMatch,
}

/// Outcome of the collection stage.
#[derive(Debug, Serialize)]
pub struct CollectReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub duration_secs: f64,
    pub target: ResolvedVideo,
    pub pages: usize,
    pub complete: bool,
    /// Why pagination stopped early, when it did.
    pub error: Option<String>,
    /// `None` when nothing was collected and no file was written.
    pub output: Option<PathBuf>,
    pub stats: CollectionStats,
}

/// Outcome of the analysis stage.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub duration_secs: f64,
    pub input: PathBuf,
    pub loaded: usize,
    pub skipped_rows: usize,
    /// `None` when there was nothing to score and no file was written.
    pub output: Option<PathBuf>,
    pub summary: Option<SentimentSummary>,
}

/// Outcome of collecting and then analyzing the file just written.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub collect: CollectReport,
    /// `None` when collection wrote nothing to analyze.
    pub analyze: Option<AnalyzeReport>,
}

/// Resolve a [`VideoTarget`] to a concrete video.
///
/// Channel matching takes the first search hit as-is; the other candidates are
/// returned so callers can show them for verification.
pub fn resolve_video(
    discovery: &dyn VideoDiscovery,
    target: &VideoTarget,
) -> Result<ResolvedVideo, PipelineError> {
    match target {
        VideoTarget::Video(id) => Ok(ResolvedVideo {
            channel: None,
            candidates: Vec::new(),
            video: VideoMatch {
                id: id.clone(),
                title: String::new(),
                published_at: None,
            },
        }),
        VideoTarget::LatestFromChannel(query) => {
            info!("Searching for channel: {query}");
            let candidates = discovery
                .search_channels(query)
                .map_err(PipelineError::Discovery)?;
            for (i, c) in candidates.iter().enumerate() {
                info!("  {}. {} (ID: {})", i + 1, c.title, c.id);
            }
            let channel = candidates
                .first()
                .cloned()
                .ok_or_else(|| PipelineError::ChannelNotFound(query.clone()))?;
            info!("Using channel: {}", channel.title);

            let video = discovery
                .latest_video(&channel.id)
                .map_err(PipelineError::Discovery)?
                .ok_or_else(|| PipelineError::NoVideos(channel.id.clone()))?;
            info!("Latest video: {} (ID: {})", video.title, video.id);

            Ok(ResolvedVideo {
                channel: Some(channel),
                candidates,
                video,
            })
        }
    }
}

/// Stage 1: discover the video, fetch every comment page, write the stage-1
/// file.
///
/// A mid-pagination failure is not an error here: whatever was fetched is
/// still written and the report is marked incomplete. Zero comments means no
/// file is written.
pub fn run_collect(
    discovery: &dyn VideoDiscovery,
    source: &dyn CommentSource,
    target: &VideoTarget,
    output: &Path,
    reporter: &dyn Reporter,
) -> Result<CollectReport, PipelineError> {
    let run_id = uuid::Uuid::new_v4().to_string();
    let span = info_span!("collect", run_id = %run_id);
    let _guard = span.enter();
    let started_at = Utc::now();
    let start = Instant::now();

    let resolved = resolve_video(discovery, target)?;
    info!("Fetching comments from video {}", resolved.video.id);
    let collection = Collector::new(source, reporter).collect(&resolved.video.id);

    let complete = collection.is_complete();
    let error = collection.error.as_ref().map(|e| e.to_string());
    if let Some(ref e) = error {
        warn!(
            "Collection incomplete after {} pages ({} comments kept): {e}",
            collection.pages,
            collection.comments.len()
        );
    }

    let written = if collection.comments.is_empty() {
        warn!("No comments retrieved, nothing to export");
        None
    } else {
        store::write_comments(output, &collection.comments)?;
        Some(output.to_path_buf())
    };

    Ok(CollectReport {
        run_id,
        started_at,
        duration_secs: start.elapsed().as_secs_f64(),
        target: resolved,
        pages: collection.pages,
        complete,
        error,
        output: written,
        stats: CollectionStats::from_comments(&collection.comments),
    })
}

/// Stage 2: read the stage-1 file, score every comment, write the stage-2
/// file and summarize.
///
/// Fails before scoring if the input can't be read. Zero loaded comments
/// skips export and summary.
pub fn run_analyze(
    scorer: &dyn TextSentimentScorer,
    input: &Path,
    output: &Path,
    reporter: &dyn Reporter,
) -> Result<AnalyzeReport, PipelineError> {
    let run_id = uuid::Uuid::new_v4().to_string();
    let span = info_span!("analyze", run_id = %run_id);
    let _guard = span.enter();
    let started_at = Utc::now();
    let start = Instant::now();

    let loaded = store::read_comments(input)?;
    if loaded.skipped_rows > 0 {
        warn!("Skipped {} unreadable rows in {}", loaded.skipped_rows, input.display());
    }
    let count = loaded.comments.len();

    if count == 0 {
        warn!("No comments to analyze in {}", input.display());
        return Ok(AnalyzeReport {
            run_id,
            started_at,
            duration_secs: start.elapsed().as_secs_f64(),
            input: input.to_path_buf(),
            loaded: 0,
            skipped_rows: loaded.skipped_rows,
            output: None,
            summary: None,
        });
    }

    info!("Analyzing sentiment for {count} comments");
    let scored = Analyzer::new(scorer, reporter).score_all(loaded.comments);
    store::write_scored(output, &scored)?;
    let summary = summarize(&scored, reporter);

    Ok(AnalyzeReport {
        run_id,
        started_at,
        duration_secs: start.elapsed().as_secs_f64(),
        input: input.to_path_buf(),
        loaded: count,
        skipped_rows: loaded.skipped_rows,
        output: Some(output.to_path_buf()),
        summary: Some(summary),
    })
}

/// Both stages back to back through the stage-1 file. Analysis is skipped
/// when collection wrote nothing.
pub fn run_both(
    discovery: &dyn VideoDiscovery,
    source: &dyn CommentSource,
    scorer: &dyn TextSentimentScorer,
    target: &VideoTarget,
    comments_csv: &Path,
    sentiment_csv: &Path,
    reporter: &dyn Reporter,
) -> Result<RunReport, PipelineError> {
    let collect = run_collect(discovery, source, target, comments_csv, reporter)?;
    let analyze = match collect.output {
        Some(ref written) => Some(run_analyze(scorer, written, sentiment_csv, reporter)?),
        None => {
            warn!("Nothing collected, skipping analysis");
            None
        }
    };
    Ok(RunReport { collect, analyze })
}
