use tracing::{info, warn};

use crate::analyze::summary::SentimentSummary;
use crate::error::SourceError;

/// Progress observer handed to the collector, analyzer and aggregator.
///
/// Every hook has a no-op default so implementations only override what they
/// care about.
pub trait Reporter {
    /// A page was fetched. `page` is 1-based, `total` counts all comments so far.
    fn page_fetched(&self, _page: usize, _batch: usize, _total: usize) {}

    /// Request for page `page` failed and pagination stopped.
    fn pagination_aborted(&self, _page: usize, _error: &SourceError) {}

    /// Pagination reached a page without a continuation cursor.
    fn pagination_finished(&self, _pages: usize, _total: usize) {}

    fn scoring_progress(&self, _done: usize, _total: usize) {}

    fn summary_ready(&self, _summary: &SentimentSummary) {}
}

/// Reporter that forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn page_fetched(&self, page: usize, batch: usize, total: usize) {
        info!("Fetched page {page}: {batch} comments ({total} total)");
    }

    fn pagination_aborted(&self, page: usize, error: &SourceError) {
        warn!("Fetching page {page} failed, keeping partial results: {error}");
    }

    fn pagination_finished(&self, pages: usize, total: usize) {
        info!("Total comments fetched: {total} across {pages} pages");
    }

    fn scoring_progress(&self, done: usize, total: usize) {
        info!("Processed {done}/{total} comments");
    }

    fn summary_ready(&self, summary: &SentimentSummary) {
        info!(
            total = summary.total_count,
            likes = summary.total_likes,
            replies = summary.total_replies,
            "Sentiment summary computed"
        );
    }
}

/// Reporter that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}
