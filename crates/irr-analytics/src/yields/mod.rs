//! Yield measures derived from cash-flow polynomials.
//!
//! # Internal Rate of Return
//!
//! With net flows `c₀, c₁, ..., cₙ` and discount factor `v = 1 / (1 + r)`,
//! the net present value is the polynomial
//!
//! ```text
//! NPV(v) = c₀ + c₁v + c₂v² + ... + cₙvⁿ
//! ```
//!
//! A real root `v` in `[0, 1)` of that polynomial is a discount factor at
//! which the flows break even. [`extract_irr`] picks the first such root
//! in root-finder order and converts it to a percentage rate.
//!
//! Irregular flows can have several qualifying roots or none.
//! Only the first is used; [`candidate_discount_factors`] lists them all
//! for callers that want to detect the ambiguity.

mod irr;

pub use irr::{
    candidate_discount_factors, extract_irr, irr_from_discount_factor, is_valid_discount_factor,
    select_discount_factor,
};
