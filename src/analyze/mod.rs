pub mod summary;

use crate::report::Reporter;
use crate::sentiment::TextSentimentScorer;
use crate::store::models::{RawComment, ScoredComment};

pub use summary::{summarize, CategoryStats, SentimentSummary};

/// Emit a progress event every this many comments.
const PROGRESS_EVERY: usize = 500;

/// Scores a batch of comments one at a time, in input order.
pub struct Analyzer<'a> {
    scorer: &'a dyn TextSentimentScorer,
    reporter: &'a dyn Reporter,
}

impl<'a> Analyzer<'a> {
    pub fn new(scorer: &'a dyn TextSentimentScorer, reporter: &'a dyn Reporter) -> Self {
        Self { scorer, reporter }
    }

    pub fn score_all(&self, comments: Vec<RawComment>) -> Vec<ScoredComment> {
        let total = comments.len();
        let mut scored = Vec::with_capacity(total);
        for (i, comment) in comments.into_iter().enumerate() {
            let scores = self.scorer.score(&comment.comment_text);
            scored.push(ScoredComment::new(comment, scores));
            let done = i + 1;
            if done % PROGRESS_EVERY == 0 || done == total {
                self.reporter.scoring_progress(done, total);
            }
        }
        scored
    }
}
