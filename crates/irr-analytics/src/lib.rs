//! # IRR Analytics
//!
//! Internal rate of return for spending/income cash-flow series.
//!
//! - **Cash Flows**: Validated spending/income series and their net flows
//! - **Yields**: Discount-factor selection and IRR conversion
//! - **Solver**: Orchestration from raw sequences to an [`IrrOutcome`]
//!
//! ## Usage
//!
//! ```rust
//! use irr_analytics::prelude::*;
//!
//! // Spend 100 now, receive 110 in one period
//! let outcome = solve_irr(vec![100.0, 0.0], vec![0.0, 110.0]).unwrap();
//! assert!((outcome.irr - 10.0).abs() < 1e-9);
//! ```
//!
//! ## Architecture
//!
//! `irr-analytics` depends on `irr-math` for root finding; `irr-math`
//! knows nothing about cash flows.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cashflows;
pub mod error;
pub mod solver;
pub mod yields;

pub use error::{AnalyticsError, AnalyticsResult};
pub use solver::{solve_irr, IrrOutcome, IrrSolver};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{CashFlowSeries, MIN_PERIODS};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::solver::{solve_irr, IrrOutcome, IrrSolver, STATUS_FAILED, STATUS_OK};
    pub use crate::yields::{
        candidate_discount_factors, extract_irr, irr_from_discount_factor,
        select_discount_factor,
    };
    pub use irr_math::solvers::RootFinderConfig;
}
