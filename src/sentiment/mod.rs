pub mod lexicon;
mod vocab;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use lexicon::LexiconScorer;

/// Compound scores strictly above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores strictly below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Polarity scores for one text.
///
/// `positive`, `negative` and `neutral` are proportions summing to 1.0;
/// `compound` is the normalized overall polarity in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTuple {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

impl ScoreTuple {
    /// Result for text that carries no sentiment-bearing content.
    pub const NEUTRAL: ScoreTuple = ScoreTuple {
        positive: 0.0,
        negative: 0.0,
        neutral: 1.0,
        compound: 0.0,
    };

    pub fn sentiment(&self) -> Sentiment {
        Sentiment::classify(self.compound)
    }
}

/// Anything that can turn free text into a [`ScoreTuple`].
///
/// Implementations must be total: empty or garbled text returns a
/// neutral-leaning result instead of an error.
pub trait TextSentimentScorer {
    fn score(&self, text: &str) -> ScoreTuple;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Report order used by summaries and tables.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Map a compound score to its category. The thresholds themselves are
    /// Neutral.
    pub fn classify(compound: f64) -> Self {
        if compound > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
