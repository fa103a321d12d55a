//! Integer sum handler.

use axum::Json;

use crate::http::types::{SumParams, SumResponse};
use crate::http::validation::ValidatedQuery;

/// Sum endpoint.
///
/// Parameter presence and integer parsing are checked by the
/// [`ValidatedQuery`] extractor; by the time this body runs both addends are
/// well-formed.
///
/// # Parameters
///
/// - `params` - Validated `a` and `b` query parameters
///
/// # Returns
///
/// Returns `{"sum": a + b}`.
pub async fn sum(ValidatedQuery(params): ValidatedQuery<SumParams>) -> Json<SumResponse> {
    Json(SumResponse { sum: params.sum() })
}
