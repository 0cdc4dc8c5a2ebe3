use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single request against the remote comment source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Errors that end a pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no channel found matching '{0}'")]
    ChannelNotFound(String),

    #[error("no videos found for channel {0}")]
    NoVideos(String),

    #[error("video discovery failed: {0}")]
    Discovery(#[source] SourceError),

    #[error("input {} missing or unreadable: {reason}", path.display())]
    InputMissing { path: PathBuf, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
