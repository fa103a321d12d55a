//! API types and parameters for HTTP handlers.

use serde::{Deserialize, Serialize};

use crate::http::validation::{parse_int_param, QuerySchema, Violation};

/// Response payload for the root endpoint.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Welcome line.
    pub message: &'static str,
    /// Quick summary of the available endpoints.
    pub endpoints: &'static str,
}

/// Response payload for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
}

/// Query parameters for the `/sum` endpoint, as received on the wire.
///
/// Both fields stay optional strings here so the framework's extraction never
/// fails on absent or non-numeric values; [`SumParams::validate`] turns them
/// into typed integers or per-field violations.
#[derive(Debug, Deserialize)]
pub struct RawSumParams {
    /// First addend, verbatim.
    pub a: Option<String>,
    /// Second addend, verbatim.
    pub b: Option<String>,
}

/// Validated query parameters for the `/sum` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumParams {
    /// First addend.
    pub a: i64,
    /// Second addend.
    pub b: i64,
}

impl SumParams {
    /// Add the two parameters.
    ///
    /// The sum is widened to 128 bits, so adding two 64-bit operands cannot
    /// overflow.
    ///
    /// # Returns
    ///
    /// Returns `a + b`.
    pub const fn sum(self) -> i128 {
        self.a as i128 + self.b as i128
    }
}

impl QuerySchema for SumParams {
    type Raw = RawSumParams;

    fn validate(raw: Self::Raw) -> Result<Self, Vec<Violation>> {
        let mut violations = Vec::new();

        let a = match parse_int_param("a", raw.a.as_deref()) {
            Ok(value) => Some(value),
            Err(violation) => {
                violations.push(violation);
                None
            }
        };
        let b = match parse_int_param("b", raw.b.as_deref()) {
            Ok(value) => Some(value),
            Err(violation) => {
                violations.push(violation);
                None
            }
        };

        match (a, b) {
            (Some(a), Some(b)) => Ok(Self { a, b }),
            _ => Err(violations),
        }
    }
}

/// Response payload for the `/sum` endpoint.
#[derive(Debug, Serialize)]
pub struct SumResponse {
    /// Sum of the two addends.
    pub sum: i128,
}
