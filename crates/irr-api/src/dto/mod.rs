//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use irr_analytics::solver::{IrrOutcome, STATUS_FAILED, STATUS_OK};

/// Request code that must accompany every solve request.
pub const RESOLVE_CODE: &str = "resolve";

/// Message returned when the IRR is NaN.
pub const NAN_MESSAGE: &str = "IRR calculation resulted in NaN.";

/// IRR solve request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrRequest {
    /// Spending per period.
    pub spending: Vec<f64>,
    /// Income per period.
    pub income: Vec<f64>,
    /// Request code; must equal `"resolve"`.
    pub code: String,
}

/// IRR response envelope.
///
/// `status` is 0 when `irr` holds a valid rate and 1 otherwise. A NaN
/// rate is reported as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrResponse {
    pub status: i32,
    pub irr: Option<f64>,
    #[serde(default)]
    pub error: String,
}

impl IrrResponse {
    /// Successful response carrying a rate.
    pub fn success(irr: f64) -> Self {
        Self {
            status: STATUS_OK,
            irr: Some(irr),
            error: String::new(),
        }
    }

    /// Failure response carrying a message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            status: STATUS_FAILED,
            irr: None,
            error: error.into(),
        }
    }
}

impl From<&IrrOutcome> for IrrResponse {
    fn from(outcome: &IrrOutcome) -> Self {
        if outcome.is_valid() {
            Self::success(outcome.irr)
        } else {
            Self::failure(NAN_MESSAGE)
        }
    }
}
