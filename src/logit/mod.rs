//! logit — multivariate logistic loss stack: core kernel, errors, and
//! post-fit presentation.
//!
//! Purpose
//! -------
//! Provide a cohesive loss layer for multivariate (multi-response) logistic
//! regression inside a sparse-group-lasso solver: validated input packages,
//! the safeguarded probability link, a stateful evaluator producing loss /
//! gradient / diagonal-Hessian quantities, and a post-fit presentation type.
//! This is the surface the outer optimizer and the reporting layer should
//! depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the numerical and structural building blocks in [`core`]:
//!   the [`LogitData`] package, representation traits over dense and sparse
//!   storage, the probability link, validation helpers, and the
//!   [`LogitLoss`] evaluator with its four (design, response)
//!   instantiations.
//! - Centralize errors in [`errors`] ([`LogitError`] and the [`LogitResult`]
//!   alias) so callers see one uniform error surface.
//! - Expose the post-fit `link`/`prob` presentation in [`fitted`] via
//!   [`LogitFit`].
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports.
//!
//! Invariants & assumptions
//! ------------------------
//! - Responses are 0/1 matrices validated once at [`LogitData`]
//!   construction; the evaluator borrows them immutably for a whole
//!   optimization run.
//! - Probabilities are always strictly inside (0, 1); non-finite predictors
//!   are rejected before any state is updated.
//! - Cached derived quantities are cleared on every predictor update; a
//!   stale read is structurally impossible, not merely handled.
//! - Evaluator instances are single-owner and not thread-safe; parallel
//!   optimization runs must each construct their own instance.
//!
//! Conventions
//! -----------
//! - Matrices are `n_samples × n_responses` on the way in; gradient and
//!   Hessian outputs are transposed (`n_responses × n_samples`).
//! - The loss is the negative Bernoulli log-likelihood
//!   `−Σ [y·log p − y·log(1−p) + log(1−p)]`; the Hessian is the diagonal
//!   approximation `p(1 − p)` per observation.
//! - This layer performs no I/O and no logging; failures surface as
//!   [`LogitResult`] values and panics indicate programming errors.
//!
//! Downstream usage
//! ----------------
//! - Typical per-run flow:
//!   1. Construct a [`LogitData`] from the loaded design and response.
//!   2. Construct one [`LogitLoss`] evaluator for the run.
//!   3. Each iteration: `set_linear_predictor` (or the zero shortcut),
//!      then read any subset of `{loss_value, gradients, hessian_row}`.
//!   4. After convergence, build a [`LogitFit`] from the final predictor
//!      for the reporting layer.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover construction validation, link
//!   postconditions, dense/sparse agreement, the cache lifecycle, and all
//!   error paths; [`errors`] tests cover `Display` payloads; [`fitted`]
//!   tests cover the presentation round-trip. The `tests/` integration
//!   suite drives full iteration cycles over all four instantiations.

pub mod core;
pub mod errors;
pub mod fitted;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. More specialized items
// (validation helpers, the representation traits, the raw link functions)
// remain under `core`.

pub use self::core::{
    LogitData, LogitDense, LogitLoss, LogitSparseBoth, LogitSparseDesign, LogitSparseResponse,
};

pub use self::errors::{LogitError, LogitResult};

pub use self::fitted::LogitFit;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use sgl_logit::logit::prelude::*;
//
// to import the main loss surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        LogitData, LogitDense, LogitError, LogitFit, LogitLoss, LogitResult, LogitSparseBoth,
        LogitSparseDesign, LogitSparseResponse,
    };
}
