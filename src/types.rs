/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are decoupled from the domain `Backer` / `TierReport`.
use serde::{Deserialize, Serialize};

use crate::backers::{AppError, Backer, TierReport};

/// A backer as listed by `list-backers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackerOutput {
    /// Display name.
    pub name: String,
    /// Tier name.
    pub tier: String,
    /// Email that an export would write, or null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&Backer> for BackerOutput {
    fn from(b: &Backer) -> Self {
        Self {
            name: b.name.clone(),
            tier: b.tier_description.clone(),
            email: b.preferred_email().map(str::to_owned),
        }
    }
}

/// Result of exporting one tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOutput {
    /// Tier name.
    pub tier: String,
    /// File written.
    pub path: String,
    /// Rows written.
    pub exported: usize,
    /// Backers left out for lack of an email address.
    pub skipped: Vec<String>,
}

impl From<&TierReport> for ExportOutput {
    fn from(r: &TierReport) -> Self {
        Self {
            tier: r.tier.clone(),
            path: r.path.display().to_string(),
            exported: r.exported,
            skipped: r.skipped.clone(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// What the user can do about it, if anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorOutput {
    /// Construct from an `AppError`.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                hint: err.hint().map(str::to_owned),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_error_envelope() {
        let err = AppError::from(ApiError::Query {
            message: "Unknown field".to_owned(),
        });
        let json = serde_json::to_value(ErrorOutput::from_app_error(&err)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "query_error");
        assert_eq!(json["error"]["message"], "Query error: Unknown field");
        assert!(json["error"].get("hint").is_none());
    }

    #[test]
    fn test_backer_output_uses_latest_email() {
        let backer = crate::backers::backer("Alice", "Gold", &["a@x.com", "b@x.com"]);
        let out = BackerOutput::from(&backer);
        assert_eq!(out.email.as_deref(), Some("b@x.com"));
        assert_eq!(out.tier, "Gold");
    }
}
