use reqwest::header::HeaderMap;
use std::fmt;
use thiserror::Error;

/// The pipeline stage an error surfaced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building and sending the request, up to response headers.
    Dispatch,
    /// Inspecting the status and reading an error body.
    Classify,
    /// Reading and decoding a success body.
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Dispatch => "dispatch",
            Stage::Classify => "classify",
            Stage::Decode => "decode",
        })
    }
}

/// A non-success HTTP outcome: `304 Not Modified` or any status outside `2xx`.
///
/// This is the error callers are expected to branch on.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// The HTTP status code. Always populated.
    pub status: u16,
    /// The server's error description, present only when the body carried a non-empty one.
    pub message: Option<String>,
    /// The raw response body. Empty for `304`, which is never read.
    pub body: String,
    /// The response headers.
    pub headers: HeaderMap,
}

impl ApiError {
    /// `true` for `304 Not Modified`, the "cached data is still valid" signal.
    pub fn is_not_modified(&self) -> bool {
        self.status == 304
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message.as_deref() {
            Some(msg) => write!(f, "API: Error {}: {msg}", self.status),
            None => write!(
                f,
                "API: got HTTP response code {} with body: {}",
                self.status, self.body
            ),
        }
    }
}

impl std::error::Error for ApiError {}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YfError {
    /// The URL or headers for a request could not be built. Never retried.
    #[error("invalid request: {0}")]
    RequestConstruction(String),

    /// The HTTP client itself could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// A network, TLS or DNS failure while talking to the server.
    #[error("transport error during {stage}: {source}")]
    Transport {
        /// Where the failure happened.
        stage: Stage,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The call's context was cancelled before the stage completed.
    #[error("request canceled during {stage}")]
    Canceled {
        /// Where the call was interrupted.
        stage: Stage,
    },

    /// The call's context deadline elapsed before the stage completed.
    #[error("deadline exceeded during {stage}")]
    DeadlineExceeded {
        /// Where the call was interrupted.
        stage: Stage,
    },

    /// The server answered with `304` or a non-`2xx` status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered `2xx` but the payload's own `chart.error` was populated.
    #[error("yahoo error: {code} - {description}")]
    Server {
        /// Yahoo's error code, e.g. `Not Found`.
        code: String,
        /// Yahoo's human-readable description.
        description: String,
    },

    /// A `2xx` body that is not a valid chart envelope.
    #[error("json parse error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A decoded response lacks data a convenience accessor needs.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl From<url::ParseError> for YfError {
    fn from(e: url::ParseError) -> Self {
        YfError::RequestConstruction(format!("invalid url: {e}"))
    }
}

impl YfError {
    pub(crate) fn transport(stage: Stage, source: reqwest::Error) -> Self {
        if source.is_builder() {
            return YfError::RequestConstruction(source.to_string());
        }
        YfError::Transport { stage, source }
    }

    /// `true` for transport-level failures, including cancellation and deadlines.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            YfError::Transport { .. } | YfError::Canceled { .. } | YfError::DeadlineExceeded { .. }
        )
    }

    /// `true` if the call was aborted through its context (cancel or deadline).
    pub fn is_canceled(&self) -> bool {
        matches!(
            self,
            YfError::Canceled { .. } | YfError::DeadlineExceeded { .. }
        )
    }

    /// The HTTP status of a structured error, if this is one.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// The structured error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            YfError::Api(e) => Some(e),
            _ => None,
        }
    }
}
