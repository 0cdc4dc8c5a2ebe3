use serde::{Deserialize, Serialize};

use crate::sentiment::{ScoreTuple, Sentiment};

/// One top-level comment as collected from the remote source.
///
/// Field order matches the stage-1 CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComment {
    pub author_name: String,
    pub likes: u64,
    pub reply_count: u64,
    pub comment_text: String,
}

/// A raw comment enriched with its sentiment scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredComment {
    #[serde(flatten)]
    pub comment: RawComment,
    pub scores: ScoreTuple,
    pub sentiment: Sentiment,
}

impl ScoredComment {
    /// Attach scores to a comment. The label is derived from the compound
    /// score only.
    pub fn new(comment: RawComment, scores: ScoreTuple) -> Self {
        Self {
            comment,
            sentiment: Sentiment::classify(scores.compound),
            scores,
        }
    }
}

/// Stats printed after a collection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    pub total_comments: usize,
    pub total_likes: u64,
    pub total_replies: u64,
    pub average_likes: Option<f64>,
    pub most_liked: Option<MostLiked>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostLiked {
    pub likes: u64,
    pub author_name: String,
    pub preview: String,
}

const PREVIEW_CHARS: usize = 60;

impl CollectionStats {
    pub fn from_comments(comments: &[RawComment]) -> Self {
        let total_likes: u64 = comments.iter().map(|c| c.likes).sum();
        let total_replies: u64 = comments.iter().map(|c| c.reply_count).sum();
        let average_likes = if comments.is_empty() {
            None
        } else {
            Some(total_likes as f64 / comments.len() as f64)
        };

        // First comment holding the maximum wins ties.
        let most_liked = comments
            .iter()
            .map(|c| c.likes)
            .max()
            .and_then(|max| comments.iter().find(|c| c.likes == max))
            .map(|c| MostLiked {
                likes: c.likes,
                author_name: c.author_name.clone(),
                preview: preview(&c.comment_text),
            });

        CollectionStats {
            total_comments: comments.len(),
            total_likes,
            total_replies,
            average_likes,
            most_liked,
        }
    }
}

fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, likes: u64, replies: u64, text: &str) -> RawComment {
        RawComment {
            author_name: author.to_string(),
            likes,
            reply_count: replies,
            comment_text: text.to_string(),
        }
    }

    #[test]
    fn test_collection_stats_empty() {
        let stats = CollectionStats::from_comments(&[]);
        assert_eq!(stats.total_comments, 0);
        assert_eq!(stats.total_likes, 0);
        assert!(stats.average_likes.is_none());
        assert!(stats.most_liked.is_none());
    }

    #[test]
    fn test_collection_stats_first_max_wins() {
        let comments = vec![
            comment("a", 3, 1, "first"),
            comment("b", 7, 0, "second"),
            comment("c", 7, 4, "third"),
        ];
        let stats = CollectionStats::from_comments(&comments);
        assert_eq!(stats.total_comments, 3);
        assert_eq!(stats.total_likes, 17);
        assert_eq!(stats.total_replies, 5);
        let avg = stats.average_likes.unwrap();
        assert!((avg - 17.0 / 3.0).abs() < 1e-9);
        let top = stats.most_liked.unwrap();
        assert_eq!(top.author_name, "b");
        assert_eq!(top.preview, "second...");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let text = "é".repeat(80);
        let p = preview(&text);
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_scored_comment_label_follows_compound() {
        let scored = ScoredComment::new(
            comment("a", 0, 0, "x"),
            ScoreTuple {
                positive: 0.0,
                negative: 0.4,
                neutral: 0.6,
                compound: -0.3,
            },
        );
        assert_eq!(scored.sentiment, Sentiment::Negative);
    }
}
