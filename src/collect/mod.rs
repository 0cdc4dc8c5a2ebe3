use serde_json::Value;

use crate::error::SourceError;
use crate::report::Reporter;
use crate::source::{CommentPage, CommentSource};
use crate::store::models::RawComment;

/// Lazy walk over every page of a video's comment threads.
///
/// The first request carries no cursor; each following request carries the
/// cursor from the page before it. Iteration ends after the first page that
/// has no cursor, or right after the first error. To start over, build a new
/// `Pages`.
pub struct Pages<'a> {
    source: &'a dyn CommentSource,
    video_id: &'a str,
    cursor: Option<String>,
    done: bool,
}

impl<'a> Pages<'a> {
    pub fn new(source: &'a dyn CommentSource, video_id: &'a str) -> Self {
        Self {
            source,
            video_id,
            cursor: None,
            done: false,
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = Result<CommentPage, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.fetch_page(self.video_id, self.cursor.as_deref()) {
            Ok(page) => {
                match page.next_cursor.as_deref().filter(|c| !c.is_empty()) {
                    Some(cursor) => self.cursor = Some(cursor.to_string()),
                    None => self.done = true,
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Result of one collection run.
#[derive(Debug)]
pub struct Collection {
    pub video_id: String,
    pub comments: Vec<RawComment>,
    /// Pages fetched successfully.
    pub pages: usize,
    /// Set when pagination stopped early; `comments` then holds only the
    /// pages before the failing one.
    pub error: Option<SourceError>,
}

impl Collection {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Drives full pagination for a video and flattens the pages into records.
pub struct Collector<'a> {
    source: &'a dyn CommentSource,
    reporter: &'a dyn Reporter,
}

impl<'a> Collector<'a> {
    pub fn new(source: &'a dyn CommentSource, reporter: &'a dyn Reporter) -> Self {
        Self { source, reporter }
    }

    pub fn collect(&self, video_id: &str) -> Collection {
        let mut comments = Vec::new();
        let mut pages = 0usize;
        let mut error = None;

        for result in Pages::new(self.source, video_id) {
            match result {
                Ok(page) => {
                    pages += 1;
                    let batch = page.items.len();
                    comments.extend(page.items.iter().map(raw_comment_from_thread));
                    self.reporter.page_fetched(pages, batch, comments.len());
                }
                Err(e) => {
                    self.reporter.pagination_aborted(pages + 1, &e);
                    error = Some(e);
                }
            }
        }

        if error.is_none() {
            self.reporter.pagination_finished(pages, comments.len());
        }

        Collection {
            video_id: video_id.to_string(),
            comments,
            pages,
            error,
        }
    }
}

/// Map a loosely structured comment thread to a record. Never fails: missing
/// or mistyped fields fall back to an empty string or zero.
///
/// The reply count is the thread's, not the top-level comment's.
pub fn raw_comment_from_thread(thread: &Value) -> RawComment {
    let snippet = thread.get("snippet");
    let top = snippet
        .and_then(|s| s.get("topLevelComment"))
        .and_then(|c| c.get("snippet"));

    let text_field = |name: &str| {
        top.and_then(|t| t.get(name))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };

    RawComment {
        author_name: text_field("authorDisplayName"),
        likes: count_field(top, &["likeCount"]),
        reply_count: count_field(snippet, &["totalReplyCount", "replyCount"]),
        comment_text: text_field("textDisplay"),
    }
}

/// First of `names` present on `parent` as a non-negative integer (or a
/// numeric string), else 0.
fn count_field(parent: Option<&Value>, names: &[&str]) -> u64 {
    let Some(parent) = parent else {
        return 0;
    };
    names
        .iter()
        .filter_map(|name| parent.get(*name))
        .find_map(|v| {
            v.as_u64()
                .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
        })
        .unwrap_or(0)
}
