use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Every way an extraction can fail.
///
/// Each stage of the pipeline returns the first error it meets, unchanged.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{reason}")]
    #[diagnostic(
        code(plextract::invalid_input),
        help("Expected: https://www.youtube.com/playlist?list=...")
    )]
    InvalidInput { reason: String },

    #[error("Could not start '{program}'")]
    #[diagnostic(
        code(plextract::tool_unavailable),
        help("Install yt-dlp (or youtube-dl) or point --ytdl to its binary")
    )]
    ToolUnavailable {
        program: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("{program} failed with {}: {stderr}", exit_label(.code))]
    #[diagnostic(code(plextract::fetch_failed))]
    FetchFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Could not parse the playlist description")]
    #[diagnostic(code(plextract::malformed_response))]
    MalformedResponse(#[source] serde_json::Error),

    #[error("No videos found in the playlist")]
    #[diagnostic(code(plextract::empty_playlist))]
    EmptyPlaylist,

    #[error("Unsupported output format '{0}'")]
    #[diagnostic(code(plextract::unsupported_format), help("Use one of: txt, csv, json"))]
    UnsupportedFormat(String),

    #[error("Could not write '{}'", path.display())]
    #[diagnostic(code(plextract::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (killed by a signal)".to_owned(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_mentions_exit_code_and_stderr() {
        let err = Error::FetchFailed {
            program: "yt-dlp".to_owned(),
            code: Some(1),
            stderr: "ERROR: The playlist does not exist.".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "yt-dlp failed with exit code 1: ERROR: The playlist does not exist."
        );
    }

    #[test]
    fn fetch_failure_without_code() {
        let err = Error::FetchFailed {
            program: "yt-dlp".to_owned(),
            code: None,
            stderr: String::new(),
        };

        assert!(err.to_string().contains("killed by a signal"));
    }
}
