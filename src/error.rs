use std::fmt;

/// Failure of a single quote resolution. Every variant collapses to the
/// not-found signal at the route layer; the detail only reaches the logs.
#[derive(Debug)]
pub enum QuoteError {
    Request(String),
    Status(String),
    NonJsonResponse(String),
    Parse(String),
    NoData(String),
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuoteError::Request(msg) => write!(f, "Request error: {}", msg),
            QuoteError::Status(msg) => write!(f, "Upstream status: {}", msg),
            QuoteError::NonJsonResponse(preview) => write!(f, "Non-JSON response: {}", preview),
            QuoteError::Parse(msg) => write!(f, "Parse error: {}", msg),
            QuoteError::NoData(msg) => write!(f, "No quote data: {}", msg),
        }
    }
}

impl std::error::Error for QuoteError {}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        QuoteError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Parse(err.to_string())
    }
}
