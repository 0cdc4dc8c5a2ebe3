use serde::Serialize;

use crate::report::Reporter;
use crate::sentiment::Sentiment;
use crate::store::models::ScoredComment;

/// Per-category slice of a [`SentimentSummary`].
///
/// Averages are `None` when the category is empty; `percentage` is `None`
/// only when the whole set is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub sentiment: Sentiment,
    pub count: usize,
    pub likes: u64,
    pub replies: u64,
    pub percentage: Option<f64>,
    pub average_likes: Option<f64>,
    pub average_replies: Option<f64>,
}

/// Distribution of a scored comment set. Recomputed on every run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub total_count: usize,
    pub total_likes: u64,
    pub total_replies: u64,
    /// Mean compound score; `None` for an empty set.
    pub average_compound: Option<f64>,
    /// Positive, Negative, Neutral, in that order.
    pub categories: [CategoryStats; 3],
}

impl SentimentSummary {
    pub fn category(&self, sentiment: Sentiment) -> &CategoryStats {
        &self.categories[slot(sentiment)]
    }
}

fn slot(sentiment: Sentiment) -> usize {
    match sentiment {
        Sentiment::Positive => 0,
        Sentiment::Negative => 1,
        Sentiment::Neutral => 2,
    }
}

fn ratio(numerator: f64, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator / denominator as f64)
}

/// Aggregate a scored set. Likes and replies are summed as integers; every
/// average or percentage with a zero denominator is `None`.
pub fn summarize(scored: &[ScoredComment], reporter: &dyn Reporter) -> SentimentSummary {
    let mut counts = [0usize; 3];
    let mut likes = [0u64; 3];
    let mut replies = [0u64; 3];
    let mut compound_sum = 0.0;

    for s in scored {
        let k = slot(s.sentiment);
        counts[k] += 1;
        likes[k] += s.comment.likes;
        replies[k] += s.comment.reply_count;
        compound_sum += s.scores.compound;
    }

    let total = scored.len();
    let categories = Sentiment::ALL.map(|sentiment| {
        let k = slot(sentiment);
        CategoryStats {
            sentiment,
            count: counts[k],
            likes: likes[k],
            replies: replies[k],
            percentage: ratio(counts[k] as f64 * 100.0, total),
            average_likes: ratio(likes[k] as f64, counts[k]),
            average_replies: ratio(replies[k] as f64, counts[k]),
        }
    });

    let summary = SentimentSummary {
        total_count: total,
        total_likes: likes.iter().sum(),
        total_replies: replies.iter().sum(),
        average_compound: ratio(compound_sum, total),
        categories,
    };
    reporter.summary_ready(&summary);
    summary
}
