/// The GraphQL transport seam and response envelope handling.
use serde::Deserialize;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use super::errors::ApiError;

/// Something that can execute one GraphQL document and return its `data`.
///
/// Implementations block until the response arrives; there is no retry.
pub trait Transport {
    /// Execute `query` with `variables`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` classified from the HTTP status or GraphQL `errors`.
    fn execute(&self, query: &str, variables: Value) -> Result<Value, ApiError>;
}

/// Execute a query and deserialize its `data` into `T`.
///
/// # Errors
///
/// Transport errors pass through; shape mismatches become `ApiError::Decode`.
pub fn run_query<T, X>(transport: &X, query: &str, variables: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    X: Transport + ?Sized,
{
    let data = transport.execute(query, variables)?;
    Ok(serde_json::from_value(data)?)
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Split a 2xx response body into `data` or the first GraphQL error.
///
/// # Errors
///
/// `ApiError::Query` when the server reported errors, `ApiError::Decode` when
/// the body is not a GraphQL response.
pub fn parse_response(body: &str) -> Result<Value, ApiError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if let Some(first) = envelope.errors.into_iter().next() {
        return Err(ApiError::Query {
            message: first.message,
        });
    }
    match envelope.data {
        Some(Value::Null) | None => Err(ApiError::Decode(serde_json::Error::custom(
            "response carries neither data nor errors",
        ))),
        Some(data) => Ok(data),
    }
}
