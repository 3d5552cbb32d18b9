use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context} contained no deals")]
    Empty { context: String },

    #[error("{context} did not finish within {timeout_secs}s")]
    Timeout { context: String, timeout_secs: u64 },

    #[error("invalid source URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
