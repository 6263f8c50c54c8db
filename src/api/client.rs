/// Blocking HTTP client bound to the Open Collective GraphQL endpoint.
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};

use super::errors::ApiError;
use super::transport::{Transport, parse_response};

/// Public Open Collective GraphQL v2 endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.opencollective.com/graphql/v2";

/// Request header that carries the personal token (`Personal-Token`).
pub const TOKEN_HEADER: &str = "personal-token";

/// A reusable handle for Open Collective queries.
///
/// Construction does no I/O; each query is one blocking POST.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    endpoint: String,
}

impl Client {
    /// Build a client that authenticates with `personal_token`.
    ///
    /// # Errors
    ///
    /// `ApiError::MissingToken` when no token is given (there is no anonymous
    /// or OAuth fallback), `ApiError::InvalidToken` when the token is not a
    /// valid header value, `ApiError::Network` if the TLS backend fails to
    /// initialise.
    pub fn construct(personal_token: Option<&str>, endpoint: &str) -> Result<Self, ApiError> {
        let token = personal_token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;

        let mut value = HeaderValue::from_str(token).map_err(|_| ApiError::InvalidToken)?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, value);

        let http = HttpClient::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_owned(),
        })
    }

    /// The endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for Client {
    fn execute(&self, query: &str, variables: Value) -> Result<Value, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, %variables, "graphql request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "graphql response");

        classify_response(status.as_u16(), &body)
    }
}

/// Turn a status and body into `data` or a classified error.
///
/// A non-2xx body carrying GraphQL `errors` is a query error, whatever the
/// status; 401 is always an auth failure.
fn classify_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        return parse_response(body);
    }
    if status != 401 {
        if let Err(err @ ApiError::Query { .. }) = parse_response(body) {
            return Err(err);
        }
    }
    Err(ApiError::from_status(status, body.to_owned()))
}
