use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FinError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be parsed as the expected JSON shape.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource was not found (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The provider throttled the request (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// The provider failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The 5xx HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The payload carried an error object instead of a result.
    #[error("API error: {0}")]
    Api(String),

    /// A field the mapping depends on was absent from the payload.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// A caller-supplied parameter was rejected before any request was made.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The timezone name is not a known IANA zone.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// An invalid date range was provided (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,
}

impl FinError {
    /// Maps a final non-success HTTP status onto the matching variant.
    pub(crate) fn from_status(status: u16, url: &url::Url) -> Self {
        let url = url.to_string();
        match status {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }
}
