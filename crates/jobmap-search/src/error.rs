use thiserror::Error;

/// Errors returned by the job-search provider client.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The provider answered 2xx but reported an error in the payload.
    #[error("{0}")]
    ApiError(String),

    /// The response body was not valid JSON or did not match the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body was valid JSON but neither of the accepted shapes.
    #[error("unexpected payload shape for {context}")]
    UnexpectedPayload { context: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ProviderError {
    /// Short message for end users: `"Server error: <status>"` for non-2xx
    /// answers, the provider's own text for payload errors.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            ProviderError::UnexpectedStatus { status, .. } => format!("Server error: {status}"),
            ProviderError::ApiError(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Rejections raised while building a [`crate::SearchRequest`].
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("at least one location is required")]
    NoLocations,

    #[error("location #{index} is blank")]
    BlankLocation { index: usize },

    #[error("radius must be a positive number of kilometres, got {0}")]
    InvalidRadius(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reason_is_server_error() {
        let err = ProviderError::UnexpectedStatus {
            status: 500,
            url: "http://localhost:5000/api/jobs".into(),
        };
        assert_eq!(err.reason(), "Server error: 500");
    }

    #[test]
    fn api_error_reason_is_provider_text() {
        let err = ProviderError::ApiError("Could not geocode location".into());
        assert_eq!(err.reason(), "Could not geocode location");
    }
}
