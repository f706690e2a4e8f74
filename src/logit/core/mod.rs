//! core — data package, probability link, representation traits, and the
//! loss evaluator for the multivariate logistic model.
//!
//! Purpose
//! -------
//! Collect the building blocks of the per-iteration loss kernel: validated
//! input containers, the safeguarded probability link, the dense/sparse
//! representation traits, shared validation helpers, and the stateful
//! evaluator the outer sparse-group-lasso solver drives.
//!
//! Key behaviors
//! -------------
//! - Bind and validate inputs once at the boundary ([`LogitData`]), so the
//!   per-iteration paths can assume clean, consistently shaped matrices.
//! - Map linear predictors to strictly interior probabilities
//!   ([`to_probability`], [`zero_probability`]) with a named overflow guard.
//! - Abstract the response representation ([`ResponseMatrix`]) so dense and
//!   compressed-sparse storage share one contract for the residual and the
//!   log-likelihood fold; carry the design axis ([`DesignMatrix`]) so the
//!   four (design, response) instantiations specialize like the enclosing
//!   objective framework.
//! - Evaluate loss, gradient, and diagonal Hessian with lazy,
//!   invalidation-guarded caches ([`LogitLoss`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Response entries are exactly 0 or 1; design and response agree on the
//!   sample count (enforced by [`LogitData::new`]).
//! - Probabilities are finite and strictly inside (0, 1) whenever they are
//!   combined with the response (enforced by the link).
//! - Derived quantities (Hessian, loss value) are valid if and only if no
//!   predictor update happened since they were computed; every mutation path
//!   clears the caches.
//!
//! Conventions
//! -----------
//! - Inputs are oriented `n_samples × n_responses`; gradient and Hessian
//!   outputs are transposed (`n_responses × n_samples`) to match the outer
//!   solver's per-response block layout.
//! - Error conditions are reported via [`LogitResult`]; panics are reserved
//!   for logic bugs. This module performs no I/O and no logging.
//!
//! Downstream usage
//! ----------------
//! - Loading code constructs a [`LogitData`] from its matrices, the solver
//!   constructs one [`LogitLoss`] per optimization run, and each iteration
//!   calls `set_linear_predictor` followed by any subset of
//!   `{loss_value, gradients, hessian_row}`.
//! - Higher-level code should depend primarily on the re-exports below or
//!   on the [`prelude`] rather than reaching into submodules directly.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover: construction validation, link
//!   postconditions, dense/sparse agreement, cache staleness, and every
//!   error path. The crate-level integration suite exercises the full
//!   iteration cycle over all four instantiations.
//!
//! [`LogitResult`]: crate::logit::errors::LogitResult

pub mod data;
pub mod evaluator;
pub mod link;
pub mod matrices;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::LogitData;
pub use self::evaluator::{
    LogitDense, LogitLoss, LogitSparseBoth, LogitSparseDesign, LogitSparseResponse,
};
pub use self::link::{to_probability, zero_probability};
pub use self::matrices::{DesignMatrix, ResponseMatrix};
pub use self::validation::{validate_predictor_shape, validate_sample_counts};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use sgl_logit::logit::core::prelude::*;
//
// to import the main loss-kernel surface in a single line.

pub mod prelude {
    pub use super::data::LogitData;
    pub use super::evaluator::{
        LogitDense, LogitLoss, LogitSparseBoth, LogitSparseDesign, LogitSparseResponse,
    };
    pub use super::link::{to_probability, zero_probability};
    pub use super::matrices::{DesignMatrix, ResponseMatrix};
}
