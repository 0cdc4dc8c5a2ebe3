use serde_json::Value;
use tracing::debug;

use crate::error::SourceError;
use crate::source::{ChannelMatch, CommentPage, CommentSource, VideoDiscovery, VideoMatch};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
/// Largest page the commentThreads endpoint will return.
pub const MAX_PAGE_SIZE: u32 = 100;
const CHANNEL_CANDIDATES: u32 = 5;

/// Blocking client for the YouTube Data API v3.
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl YouTubeClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url} {params:?}");
        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|e| SourceError::Malformed(e.to_string()))
    }
}

impl CommentSource for YouTubeClient {
    fn fetch_page(&self, video_id: &str, cursor: Option<&str>) -> Result<CommentPage, SourceError> {
        let page_size = MAX_PAGE_SIZE.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", page_size.as_str()),
            ("textFormat", "plainText"),
        ];
        if let Some(token) = cursor {
            params.push(("pageToken", token));
        }
        let json = self.get_json("/commentThreads", &params)?;
        parse_comment_page(json)
    }
}

impl VideoDiscovery for YouTubeClient {
    fn search_channels(&self, query: &str) -> Result<Vec<ChannelMatch>, SourceError> {
        let limit = CHANNEL_CANDIDATES.to_string();
        let json = self.get_json(
            "/search",
            &[
                ("part", "snippet"),
                ("type", "channel"),
                ("q", query),
                ("maxResults", limit.as_str()),
            ],
        )?;
        Ok(parse_channels(&json))
    }

    fn latest_video(&self, channel_id: &str) -> Result<Option<VideoMatch>, SourceError> {
        let json = self.get_json(
            "/search",
            &[
                ("part", "snippet"),
                ("type", "video"),
                ("channelId", channel_id),
                ("order", "date"),
                ("maxResults", "1"),
            ],
        )?;
        Ok(parse_videos(&json).into_iter().next())
    }
}

/// Split a commentThreads response into its items and continuation cursor.
/// A missing `items` array is an empty page; an empty token is no token.
pub fn parse_comment_page(json: Value) -> Result<CommentPage, SourceError> {
    let Value::Object(mut obj) = json else {
        return Err(SourceError::Malformed("expected a JSON object".into()));
    };

    let items = match obj.remove("items") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SourceError::Malformed(format!(
                "`items` is not an array: {other}"
            )))
        }
    };

    let next_cursor = obj
        .get("nextPageToken")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(CommentPage { items, next_cursor })
}

fn parse_channels(json: &Value) -> Vec<ChannelMatch> {
    search_items(json)
        .filter_map(|item| {
            let id = item
                .get("id")
                .and_then(|id| id.get("channelId"))
                .and_then(|v| v.as_str())?;
            Some(ChannelMatch {
                id: id.to_string(),
                title: snippet_str(item, "title").unwrap_or_default(),
            })
        })
        .collect()
}

fn parse_videos(json: &Value) -> Vec<VideoMatch> {
    search_items(json)
        .filter_map(|item| {
            let id = item
                .get("id")
                .and_then(|id| id.get("videoId"))
                .and_then(|v| v.as_str())?;
            Some(VideoMatch {
                id: id.to_string(),
                title: snippet_str(item, "title").unwrap_or_default(),
                published_at: snippet_str(item, "publishedAt"),
            })
        })
        .collect()
}

fn search_items(json: &Value) -> impl Iterator<Item = &Value> {
    json.get("items")
        .and_then(|v| v.as_array())
        .map(|a| a.iter())
        .into_iter()
        .flatten()
}

fn snippet_str(item: &Value, field: &str) -> Option<String> {
    item.get("snippet")
        .and_then(|s| s.get(field))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Pull `error.message` out of an API error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
