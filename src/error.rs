use thiserror::Error;

/// Failures that abort a search request.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Server is not configured with Google API credentials.")]
    Configuration,

    #[error("Google Search API error: {0}")]
    Provider(String),
}

/// Failures while enriching a single result. Never leaves the result item.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid link: {0}")]
    InvalidUrl(String),

    #[error("result has no link")]
    MissingLink,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("non-HTML content ({0})")]
    NotHtml(String),
}

/// Request body constraint violations.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("field required: {0}")]
    MissingField(&'static str),

    #[error("query must not be empty")]
    EmptyQuery,

    #[error("num must be between 1 and 10, got {0}")]
    NumOutOfRange(i64),
}
