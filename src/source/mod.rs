pub mod youtube;

use serde::Serialize;

use crate::error::SourceError;

pub use youtube::YouTubeClient;

/// One page of comment threads as returned by the remote source.
///
/// Items are kept loosely typed; turning them into records is the
/// collector's job and never fails.
#[derive(Debug, Clone, Default)]
pub struct CommentPage {
    pub items: Vec<serde_json::Value>,
    pub next_cursor: Option<String>,
}

/// A paginated source of top-level comment threads.
pub trait CommentSource {
    /// Fetch one page of threads for `video_id`. `cursor` is `None` for the
    /// first page and the previous page's continuation cursor afterwards.
    fn fetch_page(&self, video_id: &str, cursor: Option<&str>) -> Result<CommentPage, SourceError>;
}

/// A channel search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelMatch {
    pub id: String,
    pub title: String,
}

/// A video search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoMatch {
    pub id: String,
    pub title: String,
    pub published_at: Option<String>,
}

/// Channel and latest-upload lookup.
pub trait VideoDiscovery {
    /// Channels matching `query`, in the order the search ranks them.
    fn search_channels(&self, query: &str) -> Result<Vec<ChannelMatch>, SourceError>;

    /// Most recent upload of `channel_id`, if the channel has any.
    fn latest_video(&self, channel_id: &str) -> Result<Option<VideoMatch>, SourceError>;
}
