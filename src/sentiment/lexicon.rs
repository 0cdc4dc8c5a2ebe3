//! Rule-based, lexicon-driven polarity scorer.
//!
//! Follows the VADER heuristics: per-word valences, booster words, negation
//! within a three-word window, "but" contrast, ALL-CAPS emphasis and
//! punctuation amplification, then normalizes the raw sum into [-1, 1].

use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

use super::vocab::{BOOSTERS, LEXICON, NEGATIONS};
use super::{ScoreTuple, TextSentimentScorer};

/// Scalar applied to a valence that falls under a negation.
const N_SCALAR: f64 = -0.74;
/// Extra emphasis for an ALL-CAPS word in mixed-case text.
const C_INCR: f64 = 0.733;
/// Normalization constant approximating the max expected raw sum.
const ALPHA: f64 = 15.0;

const EXCLAIM_INCR: f64 = 0.292;
const MAX_EXCLAIMS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

pub struct LexiconScorer {
    words: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    edge_punct: Regex,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            words: LEXICON.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            edge_punct: Regex::new(r"^[[:punct:]]+|[[:punct:]]+$").expect("static regex"),
        }
    }

    /// Valence of a single lowercase word, if it carries one.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    /// Split on whitespace, drop single-character tokens ("I", "a"), and
    /// strip surrounding punctuation unless that would leave one character or
    /// fewer (keeps emoticons like ":)" and "<3").
    fn tokens<'t>(&self, text: &'t str) -> Vec<Cow<'t, str>> {
        text.split_whitespace()
            .filter(|raw| raw.chars().count() > 1)
            .map(|raw| {
                let stripped = self.edge_punct.replace_all(raw, "");
                if stripped.chars().count() <= 1 {
                    Cow::Borrowed(raw)
                } else {
                    stripped
                }
            })
            .collect()
    }

    fn booster_scalar(&self, word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&base) = self.boosters.get(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if cap_diff && is_upper(word) {
            scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
        }
        scalar
    }

    fn word_valence(
        &self,
        tokens: &[Cow<'_, str>],
        lowers: &[String],
        i: usize,
        cap_diff: bool,
    ) -> f64 {
        let lower = lowers[i].as_str();
        let Some(base) = self.valence(lower) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before a rated word acts as a negator, not a word.
        let next_rated = lowers
            .get(i + 1)
            .is_some_and(|next| self.words.contains_key(next.as_str()));
        if lower == "no" && next_rated {
            valence = 0.0;
        }
        if (i > 0 && lowers[i - 1] == "no")
            || (i > 1 && lowers[i - 2] == "no")
            || (i > 2 && lowers[i - 3] == "no" && matches!(lowers[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if cap_diff && is_upper(&tokens[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for back in 1..=3usize {
            if i < back {
                break;
            }
            let prev = lowers[i - back].as_str();
            if self.words.contains_key(prev) {
                continue;
            }
            let mut scalar = self.booster_scalar(&tokens[i - back], prev, valence, cap_diff);
            match back {
                2 => scalar *= 0.95,
                3 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = negation_window(valence, lowers, i, back);
        }

        // "least" flips polarity unless it's "at least" / "very least".
        if i > 0 && lowers[i - 1] == "least" {
            let idiom = i > 1 && matches!(lowers[i - 2].as_str(), "at" | "very");
            if !idiom {
                valence *= N_SCALAR;
            }
        }

        valence
    }
}

impl TextSentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> ScoreTuple {
        let tokens = self.tokens(text);
        if tokens.is_empty() {
            return ScoreTuple::NEUTRAL;
        }
        let lowers: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let upper_count = tokens.iter().filter(|t| is_upper(t)).count();
        let cap_diff = upper_count > 0 && upper_count < tokens.len();

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let lower = lowers[i].as_str();
            if self.boosters.contains_key(lower) {
                sentiments.push(0.0);
                continue;
            }
            if lower == "kind" && lowers.get(i + 1).is_some_and(|n| n == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.word_valence(&tokens, &lowers, i, cap_diff));
        }

        apply_but_contrast(&lowers, &mut sentiments);
        finalize(&sentiments, punctuation_emphasis(text))
    }
}

/// Words before the first "but" count half, words after it count 1.5x.
fn apply_but_contrast(lowers: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowers.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.matches('!').count().min(MAX_EXCLAIMS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclaims as f64 * EXCLAIM_INCR + question_amp
}

fn finalize(sentiments: &[f64], punct: f64) -> ScoreTuple {
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total <= 0.0 {
        return ScoreTuple::NEUTRAL;
    }
    ScoreTuple {
        positive: (pos_sum / total).abs(),
        negative: (neg_sum / total).abs(),
        neutral: (neu_count / total).abs(),
        compound,
    }
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn negation_window(valence: f64, lowers: &[String], i: usize, back: usize) -> f64 {
    match back {
        1 => {
            if is_negated(&lowers[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            let far = lowers[i - back].as_str();
            let near = lowers[i - back + 1].as_str();
            if far == "never" && (near == "so" || near == "this") {
                return valence * 1.25;
            }
            if far == "without" && near == "doubt" {
                return valence;
            }
            if is_negated(far) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

fn is_negated(lower: &str) -> bool {
    NEGATIONS.contains(&lower) || lower.contains("n't")
}

/// Has at least one cased character and no lowercase ones.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Sentiment;

    fn score(text: &str) -> ScoreTuple {
        LexiconScorer::new().score(text)
    }

    fn assert_proportions(s: &ScoreTuple) {
        let total = s.positive + s.negative + s.neutral;
        assert!((total - 1.0).abs() < 1e-9, "proportions sum to {total}");
        assert!(s.positive >= 0.0 && s.negative >= 0.0 && s.neutral >= 0.0);
        assert!((-1.0..=1.0).contains(&s.compound));
    }

    #[test]
    fn test_empty_text_is_neutral() {
        for text in ["", "   ", "\n\t"] {
            let s = score(text);
            assert_eq!(s, ScoreTuple::NEUTRAL);
            assert_eq!(s.sentiment(), Sentiment::Neutral);
        }
    }

    #[test]
    fn test_love_this() {
        let s = score("I love this!");
        // 3.2 + one exclamation = 3.492 -> 3.492 / sqrt(3.492^2 + 15)
        assert!((s.compound - 0.6696).abs() < 1e-3, "compound = {}", s.compound);
        assert_eq!(s.sentiment(), Sentiment::Positive);
        assert_eq!(s.negative, 0.0);
        // "I" is dropped, leaving "love" and a neutral "this".
        assert!((s.positive - 0.8179).abs() < 1e-3, "positive = {}", s.positive);
        assert!((s.neutral - 0.1821).abs() < 1e-3, "neutral = {}", s.neutral);
        assert_proportions(&s);
    }

    #[test]
    fn test_common_words_have_expected_polarity() {
        let positive = ["good", "great", "love", "nice", "best", "funny", "wow", "thanks"];
        let negative = ["bad", "hate", "lost", "kill", "lying", "worst", "fake", "boring"];
        for word in positive {
            let s = score(word);
            assert_eq!(s.sentiment(), Sentiment::Positive, "{word}: {}", s.compound);
        }
        for word in negative {
            let s = score(word);
            assert_eq!(s.sentiment(), Sentiment::Negative, "{word}: {}", s.compound);
        }
    }

    #[test]
    fn test_good_in_short_phrases() {
        assert_eq!(score("the food was good").sentiment(), Sentiment::Positive);
        assert_eq!(score("this is very good show").sentiment(), Sentiment::Positive);
        assert_eq!(score("not good idea").sentiment(), Sentiment::Negative);
    }

    #[test]
    fn test_single_char_tokens_dropped() {
        let scorer = LexiconScorer::new();
        let tokens = scorer.tokens("I think a show is x");
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        assert_eq!(tokens, vec!["think", "show", "is"]);
        assert_eq!(score("I"), ScoreTuple::NEUTRAL);
    }

    #[test]
    fn test_emoticons_score() {
        assert_eq!(score(":)").sentiment(), Sentiment::Positive);
        assert_eq!(score(":D").sentiment(), Sentiment::Positive);
        assert_eq!(score("<3").sentiment(), Sentiment::Positive);
        assert_eq!(score(":(").sentiment(), Sentiment::Negative);
        assert!(score("nice episode :)").compound > score("nice episode").compound);
    }

    #[test]
    fn test_this_is_terrible() {
        let s = score("This is terrible.");
        assert!((s.compound + 0.4767).abs() < 1e-3, "compound = {}", s.compound);
        assert_eq!(s.sentiment(), Sentiment::Negative);
        assert_eq!(s.positive, 0.0);
        assert_proportions(&s);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let plain = score("this is good");
        let negated = score("this is not good");
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0);
        let contracted = score("this isn't good");
        assert!((contracted.compound - negated.compound).abs() < 1e-12);
    }

    #[test]
    fn test_booster_intensifies() {
        let plain = score("the food was good");
        let boosted = score("the food was very good");
        let damped = score("the food was slightly good");
        assert!(boosted.compound > plain.compound);
        assert!(damped.compound < plain.compound);
    }

    #[test]
    fn test_caps_emphasis_in_mixed_case() {
        let plain = score("that was great fun");
        let shouted = score("that was GREAT fun");
        assert!(shouted.compound > plain.compound);
        // All-caps text has no differential, so no extra emphasis.
        let all_caps = score("THAT WAS GREAT FUN");
        assert!((all_caps.compound - plain.compound).abs() < 1e-12);
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        let s = score("the intro was great but the ending was terrible");
        assert!(s.compound < 0.0, "compound = {}", s.compound);
    }

    #[test]
    fn test_exclamations_amplify_and_cap() {
        let one = score("nice!");
        let three = score("nice!!!");
        let four = score("nice!!!!");
        let ten = score("nice!!!!!!!!!!");
        assert!(three.compound > one.compound);
        assert!((four.compound - ten.compound).abs() < 1e-12);
    }

    #[test]
    fn test_unrated_words_are_neutral() {
        let s = score("the quick brown fox");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 1.0);
        assert_proportions(&s);
    }

    #[test]
    fn test_no_before_rated_word_negates() {
        let s = score("no good");
        assert!(s.compound < 0.0);
    }

    #[test]
    fn test_emoticon_like_tokens_keep_punctuation() {
        let scorer = LexiconScorer::new();
        let tokens = scorer.tokens("wow!! :) ok.");
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        assert_eq!(tokens, vec!["wow", ":)", "ok"]);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let text = "Honestly the BEST episode, but she was so rude!!";
        assert_eq!(score(text), score(text));
    }
}
