//! Search failures
//!
//! Causes stay tagged for logging and tests; the view only ever sees
//! [`SearchError::user_message`].

use std::fmt;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a location.";

/// Which of the two backend requests failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Current,
    Forecast,
}

impl RequestKind {
    pub fn path(self) -> &'static str {
        match self {
            RequestKind::Current => "weather/current",
            RequestKind::Forecast => "weather/forecast",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            RequestKind::Current => "Failed to fetch current weather.",
            RequestKind::Forecast => "Failed to fetch forecast.",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Current => write!(f, "current weather"),
            RequestKind::Forecast => write!(f, "forecast"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("Please enter a location.")]
    Validation,
    #[error("{request} request failed: {source}")]
    Transport {
        request: RequestKind,
        #[source]
        source: reqwest::Error,
    },
    #[error("{request} response malformed: {reason}")]
    Parse { request: RequestKind, reason: String },
}

impl SearchError {
    /// The single message shown in the error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Validation => EMPTY_QUERY_MESSAGE,
            SearchError::Transport { request, .. } | SearchError::Parse { request, .. } => {
                request.failure_message()
            }
        }
    }

    pub fn request(&self) -> Option<RequestKind> {
        match self {
            SearchError::Validation => None,
            SearchError::Transport { request, .. } | SearchError::Parse { request, .. } => {
                Some(*request)
            }
        }
    }
}

/// Trim the raw input, rejecting empty and whitespace-only queries.
pub fn validate_query(raw: &str) -> Result<&str, SearchError> {
    let query = raw.trim();
    if query.is_empty() {
        Err(SearchError::Validation)
    } else {
        Ok(query)
    }
}
