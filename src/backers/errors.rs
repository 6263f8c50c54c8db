/// Errors surfaced at the command boundary.
use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// An Open Collective request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No usable personal token could be obtained.
    #[error("No Open Collective token available: {reason}")]
    Configuration {
        /// What went wrong while looking for a token.
        reason: String,
    },

    /// The platform credential store could not be used.
    #[error("Keyring access error: {0}")]
    Credentials(#[from] keyring::Error),

    /// The user chose not to replace something that already exists.
    #[error("Not overwriting {target}")]
    OverwriteDeclined {
        /// What would have been replaced (a path or "the stored token").
        target: String,
    },

    /// Writing an export file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Csv {
        /// Destination that was being written.
        path: PathBuf,
        /// Underlying CSV or I/O error.
        #[source]
        source: csv::Error,
    },

    /// Reading an answer from the terminal failed.
    #[error("Failed to read from the terminal: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Exit code mapping for `AppError` variants.
impl AppError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OverwriteDeclined { .. } => 0,
            Self::Configuration { .. } | Self::Credentials(_) => 3,
            Self::Api(api) => match api {
                ApiError::MissingToken | ApiError::InvalidToken => 3,
                ApiError::Unauthorized { .. } => 4,
                ApiError::Server { .. } => 5,
                ApiError::Query { .. } | ApiError::OrganizationNotFound { .. } => 6,
                ApiError::Network(_) | ApiError::Decode(_) => 1,
            },
            Self::Csv { .. } | Self::Prompt(_) => 1,
        }
    }

    /// Whether this ends the run cleanly rather than as a failure.
    #[must_use]
    pub fn is_clean_exit(&self) -> bool {
        matches!(self, Self::OverwriteDeclined { .. })
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Api(api) => match api {
                ApiError::MissingToken | ApiError::InvalidToken => "configuration_error",
                ApiError::Unauthorized { .. } => "unauthorized",
                ApiError::Server { .. } => "server_error",
                ApiError::Query { .. } => "query_error",
                ApiError::OrganizationNotFound { .. } => "organization_not_found",
                ApiError::Network(_) => "network_error",
                ApiError::Decode(_) => "unexpected_response",
            },
            Self::Configuration { .. } => "configuration_error",
            Self::Credentials(_) => "keyring_error",
            Self::OverwriteDeclined { .. } => "overwrite_declined",
            Self::Csv { .. } => "write_error",
            Self::Prompt(_) => "prompt_error",
        }
    }

    /// A next-step hint for the user, if one applies.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Api(api) => api.hint(),
            Self::Configuration { .. } => {
                Some("Store a personal token with `oc-export set-token` or set OPENCOLLECTIVE_TOKEN.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_classification() {
        let err = AppError::from(ApiError::from_status(401, "401 Unauthorized".to_owned()));
        assert_eq!(err.code(), "unauthorized");
        assert_eq!(err.exit_code(), 4);
        assert_eq!(
            err.hint(),
            Some("Please check the status of your Open Collective token.")
        );
        assert!(!err.is_clean_exit());
    }

    #[test]
    fn test_declined_is_clean() {
        let err = AppError::OverwriteDeclined {
            target: "out.csv".to_owned(),
        };
        assert!(err.is_clean_exit());
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_missing_token_is_configuration() {
        let err = AppError::from(ApiError::MissingToken);
        assert_eq!(err.code(), "configuration_error");
        assert_eq!(err.exit_code(), 3);
    }
}
