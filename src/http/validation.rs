//! Typed query-parameter validation for HTTP handlers.
//!
//! Handlers declare their parameters through [`QuerySchema`]: a loosely typed
//! raw form the framework can always deserialize, plus a validate step that
//! coerces it into the typed form. The [`ValidatedQuery`] extractor runs both
//! before the handler body, so handlers only ever see well-formed input and
//! invalid requests are rejected with a structured 422 response.

use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Request location reported in every violation; query parameters are the
/// only input this service validates.
const PARAM_LOCATION: &str = "query";

/// Error kind attached to a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required parameter was absent.
    Missing,
    /// The parameter was present but not parseable as an integer.
    IntParsing,
    /// The query string as a whole could not be deserialized
    /// (repeated keys, broken percent-encoding).
    Malformed,
}

/// A single failed constraint on the request's query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Parameter name, when the failure is attributable to one field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    /// Request location the value came from.
    pub location: &'static str,
    /// Error kind.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Build a violation for an absent required parameter.
    ///
    /// # Parameters
    ///
    /// - `field` - Declared parameter name
    ///
    /// # Returns
    ///
    /// Returns a `Violation` with kind `missing`.
    pub fn missing(field: &'static str) -> Self {
        Self {
            field: Some(field),
            location: PARAM_LOCATION,
            kind: ViolationKind::Missing,
            message: "required parameter is missing".to_string(),
        }
    }

    /// Build a violation for a value that is not a valid integer.
    ///
    /// # Parameters
    ///
    /// - `field` - Declared parameter name
    /// - `value` - Raw value as received
    ///
    /// # Returns
    ///
    /// Returns a `Violation` with kind `int_parsing`.
    pub fn int_parsing(field: &'static str, value: &str) -> Self {
        Self {
            field: Some(field),
            location: PARAM_LOCATION,
            kind: ViolationKind::IntParsing,
            message: format!("not a valid integer: {value}"),
        }
    }

    /// Build a violation for a query string that did not deserialize at all.
    ///
    /// # Parameters
    ///
    /// - `message` - Deserializer error text
    ///
    /// # Returns
    ///
    /// Returns a `Violation` with kind `malformed` and no field attribution.
    pub fn malformed(message: String) -> Self {
        Self { field: None, location: PARAM_LOCATION, kind: ViolationKind::Malformed, message }
    }
}

/// Rejection returned when query validation fails.
///
/// Converts into an HTTP 422 response whose JSON body lists every violation,
/// so a request with several bad parameters reports all of them at once.
#[derive(Debug, Error)]
#[error("query validation failed for {} parameter(s)", .violations.len())]
pub struct ValidationRejection {
    /// Collected violations, in field declaration order.
    pub violations: Vec<Violation>,
}

impl ValidationRejection {
    /// Create a rejection from collected violations.
    ///
    /// # Parameters
    ///
    /// - `violations` - Violations to report, one per failed constraint
    ///
    /// # Returns
    ///
    /// Returns a new `ValidationRejection` instance.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Wrap the framework's query rejection (undeserializable query string).
    fn from_query_rejection(rejection: QueryRejection) -> Self {
        Self::new(vec![Violation::malformed(rejection.body_text())])
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        tracing::warn!("request rejected: {self}");

        let body = serde_json::json!({
            "error": "invalid query parameters",
            "detail": self.violations,
        });

        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Declarative schema for typed query parameters.
///
/// `Raw` is the loosely typed shape the framework deserializes the query
/// string into (optional strings, so extraction itself cannot drop field
/// information); `validate` coerces it into the typed form, collecting a
/// violation per failed field instead of stopping at the first.
pub trait QuerySchema: Sized {
    /// Loosely typed form the framework deserializes the query string into.
    type Raw: DeserializeOwned;

    /// Coerce and validate the raw parameters into the typed form.
    ///
    /// # Errors
    ///
    /// Returns every violation found, one per failed field.
    fn validate(raw: Self::Raw) -> Result<Self, Vec<Violation>>;
}

/// Extractor that runs `T`'s schema before the handler body.
///
/// Usage in handlers:
/// `async fn sum(ValidatedQuery(params): ValidatedQuery<SumParams>) { /* use params */ }`
#[derive(Debug, Clone, Copy)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: QuerySchema,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<T::Raw>::from_request_parts(parts, state)
            .await
            .map_err(Self::Rejection::from_query_rejection)?;

        T::validate(raw).map(ValidatedQuery).map_err(Self::Rejection::new)
    }
}

/// Parse one required integer parameter.
///
/// Surrounding ASCII whitespace is ignored; form decoding turns `+` into a
/// space before the value reaches us.
///
/// # Parameters
///
/// - `field` - Declared parameter name, used in the violation
/// - `value` - Raw value as received, or `None` when the parameter was absent
///
/// # Returns
///
/// Returns the parsed integer on success.
///
/// # Errors
///
/// Returns a `Violation` with kind `missing` or `int_parsing`.
pub fn parse_int_param(field: &'static str, value: Option<&str>) -> Result<i64, Violation> {
    let Some(raw) = value else {
        return Err(Violation::missing(field));
    };

    raw.trim().parse::<i64>().map_err(|_| Violation::int_parsing(field, raw))
}
