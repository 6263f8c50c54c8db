/// Errors from the Open Collective GraphQL transport layer.
use thiserror::Error;

/// Typed transport failures, classified once at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No personal token was supplied; OAuth is not supported.
    #[error("No authentication mechanism available: supply a personal token")]
    MissingToken,

    /// The token cannot be sent as an HTTP header value.
    #[error("Personal token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// The API rejected the token (HTTP 401).
    #[error("401 Unauthorized: {body}")]
    Unauthorized {
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// Any other non-success HTTP status.
    #[error("{status} server error: {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// The server answered but refused the query.
    #[error("Query error: {message}")]
    Query {
        /// Message of the first GraphQL error.
        message: String,
    },

    /// The query succeeded but no collective has the given slug.
    #[error("No organization with slug '{slug}'")]
    OrganizationNotFound {
        /// The slug that was queried.
        slug: String,
    },

    /// Connection, TLS or timeout failure below HTTP.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Unexpected response from Open Collective: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 401 {
            Self::Unauthorized { body }
        } else {
            Self::Server { status, body }
        }
    }

    /// A short user-facing hint for what to do next, if there is one.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingToken | Self::InvalidToken => {
                Some("Store a personal token with `oc-export set-token`.")
            }
            Self::Unauthorized { .. } => {
                Some("Please check the status of your Open Collective token.")
            }
            Self::Server { status, .. } if *status >= 500 => {
                Some("Open Collective can't process our query. Try again later.")
            }
            Self::OrganizationNotFound { .. } => Some("Check the organization slug."),
            _ => None,
        }
    }
}
