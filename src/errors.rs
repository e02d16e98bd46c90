use std::path::PathBuf;
use thiserror::Error;

/// Required input is missing; raised before any file or network I/O.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("URL is required. Use -url to specify the endpoint.")]
    MissingUrl,
}

/// A request configuration document could not be encoded or decoded.
#[derive(Error, Debug)]
#[error("invalid request configuration")]
pub struct ParseError(#[from] pub serde_json::Error);

/// Failures of the load/save boundary between a request configuration and the filesystem.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Failures while building, sending or reading a single http request.
#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("{0:?} is not a valid http method")]
    InvalidMethod(String),

    #[error("{url:?} is not a valid url")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported url scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error(transparent)]
    MissingUrl(#[from] UsageError),

    #[error("http client could not be initialized")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Transport(reqwest::Error),

    #[error(transparent)]
    Body(reqwest::Error),
}

impl ExecutorError {
    /// Label that prefixes the message when the error reaches the user.
    pub fn label(&self) -> &'static str {
        if self.is_request_error() {
            return "Error creating request";
        }
        match self {
            ExecutorError::Body(_) => "Error reading response body",
            _ => "Error executing request",
        }
    }

    /// True for failures raised before anything was sent over the network.
    pub fn is_request_error(&self) -> bool {
        !matches!(self, ExecutorError::Transport(_) | ExecutorError::Body(_))
    }
}
