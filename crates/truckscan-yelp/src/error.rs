use thiserror::Error;

/// Errors returned by the Yelp Fusion API client.
///
/// Every variant is a request failure from the caller's point of view: the
/// collection run degrades it to "no businesses" or "skip this business".
#[derive(Debug, Error)]
pub enum YelpError {
    /// Network or TLS failure from the underlying HTTP client, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
