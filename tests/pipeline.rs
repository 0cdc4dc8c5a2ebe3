//! End-to-end runs of both stages against an in-memory comment source.

use serde_json::{json, Value};
use std::cell::Cell;
use std::path::Path;

use ytc::error::{PipelineError, SourceError};
use ytc::pipeline::{run_analyze, run_both, run_collect, VideoTarget};
use ytc::report::SilentReporter;
use ytc::sentiment::{LexiconScorer, Sentiment};
use ytc::source::{ChannelMatch, CommentPage, CommentSource, VideoDiscovery, VideoMatch};
use ytc::store;

struct OneChannel;

impl VideoDiscovery for OneChannel {
    fn search_channels(&self, _query: &str) -> Result<Vec<ChannelMatch>, SourceError> {
        Ok(vec![ChannelMatch {
            id: "UC1".into(),
            title: "Pop the Balloon".into(),
        }])
    }

    fn latest_video(&self, _channel_id: &str) -> Result<Option<VideoMatch>, SourceError> {
        Ok(Some(VideoMatch {
            id: "vid1".into(),
            title: "Episode 1".into(),
            published_at: Some("2026-01-01T00:00:00Z".into()),
        }))
    }
}

/// Serves `pages` in order; fails once it runs past `fail_at` if set.
struct PagedSource {
    pages: Vec<Vec<Value>>,
    fail_at: Option<usize>,
    calls: Cell<usize>,
}

impl PagedSource {
    fn new(pages: Vec<Vec<Value>>) -> Self {
        Self {
            pages,
            fail_at: None,
            calls: Cell::new(0),
        }
    }
}

impl CommentSource for PagedSource {
    fn fetch_page(&self, _video_id: &str, _cursor: Option<&str>) -> Result<CommentPage, SourceError> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if self.fail_at == Some(n) {
            return Err(SourceError::Api {
                status: 403,
                message: "quotaExceeded".into(),
            });
        }
        let items = self.pages.get(n).cloned().unwrap_or_default();
        let next_cursor = (n + 1 < self.pages.len()).then(|| format!("tok{}", n + 1));
        Ok(CommentPage { items, next_cursor })
    }
}

fn thread(author: &str, likes: u64, replies: u64, text: &str) -> Value {
    json!({
        "snippet": {
            "totalReplyCount": replies,
            "topLevelComment": {
                "snippet": {
                    "authorDisplayName": author,
                    "likeCount": likes,
                    "textDisplay": text
                }
            }
        }
    })
}

fn latest() -> VideoTarget {
    VideoTarget::LatestFromChannel("Pop the Balloon".into())
}

#[test]
fn collect_then_analyze_two_comments() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("comments.csv");
    let scored = dir.path().join("sentiment.csv");

    let source = PagedSource::new(vec![
        vec![thread("Ana", 10, 0, "I love this!")],
        vec![thread("Ben", 2, 1, "This is terrible.")],
    ]);

    let collected = run_collect(&OneChannel, &source, &latest(), &raw, &SilentReporter).unwrap();
    assert!(collected.complete);
    assert_eq!(collected.pages, 2);
    assert_eq!(collected.output.as_deref(), Some(raw.as_path()));
    assert_eq!(collected.stats.total_comments, 2);
    assert_eq!(collected.stats.total_likes, 12);
    assert_eq!(collected.stats.most_liked.as_ref().unwrap().author_name, "Ana");

    let analyzed = run_analyze(&LexiconScorer::new(), &raw, &scored, &SilentReporter).unwrap();
    assert_eq!(analyzed.loaded, 2);
    assert_eq!(analyzed.output.as_deref(), Some(scored.as_path()));

    let summary = analyzed.summary.unwrap();
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.total_likes, 12);
    assert_eq!(summary.total_replies, 1);

    let pos = summary.category(Sentiment::Positive);
    assert_eq!(pos.count, 1);
    assert_eq!(pos.percentage, Some(50.0));
    assert_eq!(pos.average_likes, Some(10.0));

    let neg = summary.category(Sentiment::Negative);
    assert_eq!(neg.count, 1);
    assert_eq!(neg.percentage, Some(50.0));
    assert_eq!(neg.average_likes, Some(2.0));
    assert_eq!(neg.average_replies, Some(1.0));

    let neu = summary.category(Sentiment::Neutral);
    assert_eq!(neu.count, 0);
    assert_eq!(neu.percentage, Some(0.0));
    assert_eq!(neu.average_likes, None);

    let text = std::fs::read_to_string(&scored).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(store::SCORED_COLUMNS.join(",").as_str()));
    assert_eq!(
        lines.next(),
        Some("Ana,Positive,0.6696,0.8179,0.0,0.1821,10,0,I love this!")
    );
    assert_eq!(
        lines.next(),
        Some("Ben,Negative,-0.4767,0.0,0.6078,0.3922,2,1,This is terrible.")
    );
    assert!(lines.next().is_none());
}

#[test]
fn partial_collection_is_still_written() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("comments.csv");

    let mut source = PagedSource::new(vec![
        vec![thread("a", 1, 0, "first"), thread("b", 2, 0, "second")],
        vec![thread("c", 3, 0, "never seen")],
    ]);
    source.fail_at = Some(1);

    let report = run_collect(&OneChannel, &source, &latest(), &raw, &SilentReporter).unwrap();
    assert!(!report.complete);
    assert_eq!(report.pages, 1);
    assert!(report.error.as_deref().unwrap().contains("quotaExceeded"));

    let loaded = store::read_comments(&raw).unwrap();
    let authors: Vec<_> = loaded.comments.iter().map(|c| c.author_name.as_str()).collect();
    assert_eq!(authors, ["a", "b"]);
}

#[test]
fn empty_collection_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("comments.csv");

    let source = PagedSource::new(vec![vec![]]);
    let report = run_collect(&OneChannel, &source, &latest(), &raw, &SilentReporter).unwrap();

    assert!(report.complete);
    assert!(report.output.is_none());
    assert_eq!(report.stats.total_comments, 0);
    assert_eq!(report.stats.average_likes, None);
    assert!(!raw.exists());
}

#[test]
fn analyze_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("sentiment.csv");

    let err = run_analyze(&LexiconScorer::new(), &input, &output, &SilentReporter).unwrap_err();
    assert!(matches!(err, PipelineError::InputMissing { ref path, .. } if path == &input));
    assert!(!output.exists());
}

#[test]
fn analyze_header_only_input_skips_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("comments.csv");
    let output = dir.path().join("sentiment.csv");
    std::fs::write(&input, "author_name,likes,reply_count,comment_text\n").unwrap();

    let report = run_analyze(&LexiconScorer::new(), &input, &output, &SilentReporter).unwrap();
    assert_eq!(report.loaded, 0);
    assert!(report.output.is_none());
    assert!(report.summary.is_none());
    assert!(!Path::new(&output).exists());
}

#[test]
fn direct_video_target_skips_discovery() {
    struct NoDiscovery;
    impl VideoDiscovery for NoDiscovery {
        fn search_channels(&self, _: &str) -> Result<Vec<ChannelMatch>, SourceError> {
            panic!("search must not run for a direct video id")
        }
        fn latest_video(&self, _: &str) -> Result<Option<VideoMatch>, SourceError> {
            panic!("search must not run for a direct video id")
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("comments.csv");
    let source = PagedSource::new(vec![vec![thread("z", 0, 0, "ok")]]);

    let report = run_collect(
        &NoDiscovery,
        &source,
        &VideoTarget::Video("abc123".into()),
        &raw,
        &SilentReporter,
    )
    .unwrap();
    assert_eq!(report.target.video.id, "abc123");
    assert!(report.target.channel.is_none());
    assert!(raw.exists());
}

#[test]
fn run_both_reports_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("comments.csv");
    let scored = dir.path().join("sentiment.csv");
    let source = PagedSource::new(vec![vec![thread("Ana", 10, 0, "I love this!")]]);

    let report = run_both(
        &OneChannel,
        &source,
        &LexiconScorer::new(),
        &latest(),
        &raw,
        &scored,
        &SilentReporter,
    )
    .unwrap();
    assert!(scored.exists());

    let doc: Value = serde_json::from_str(&serde_json::to_string_pretty(&report).unwrap()).unwrap();
    assert_eq!(doc["collect"]["stats"]["total_comments"], 1);
    assert_eq!(doc["analyze"]["loaded"], 1);
    assert_eq!(doc["analyze"]["summary"]["total_count"], 1);
}

#[test]
fn run_both_skips_analysis_when_nothing_collected() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("comments.csv");
    let scored = dir.path().join("sentiment.csv");
    let source = PagedSource::new(vec![vec![]]);

    let report = run_both(
        &OneChannel,
        &source,
        &LexiconScorer::new(),
        &latest(),
        &raw,
        &scored,
        &SilentReporter,
    )
    .unwrap();
    assert!(report.analyze.is_none());
    assert!(!raw.exists());
    assert!(!scored.exists());

    let doc = serde_json::to_value(&report).unwrap();
    assert!(doc["analyze"].is_null());
}
