//! sgl_logit — multivariate logistic loss evaluator for sparse group lasso
//! solvers.
//!
//! Purpose
//! -------
//! Serve as the loss-function kernel of an iterative penalized-regression
//! solver fitting a multivariate logistic model. Each iteration, the outer
//! optimizer hands this crate a linear predictor matrix and reads back a
//! scalar negative log-likelihood, a gradient matrix, and a per-response
//! diagonal Hessian approximation — the quantities a gradient-based or
//! proximal method needs at every step.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules ([`logit`] and [`numerics`]) as the public
//!   crate surface.
//! - Keep the logistic link numerically safe: exponent arguments are clipped
//!   through a named bound so probabilities are always finite and strictly
//!   inside (0, 1).
//! - Cache the expensive derived quantities (Hessian, loss value) lazily and
//!   clear the caches on every predictor update, so a stale read is
//!   structurally impossible.
//! - Stay generic over dense (`ndarray`) and compressed-sparse (`sprs`)
//!   storage for both the design and the response matrix — four
//!   instantiations, one contract.
//!
//! Invariants & assumptions
//! ------------------------
//! - The response matrix is a validated 0/1 matrix, immutable for the life
//!   of an evaluator; the design matrix is shape-only from this crate's
//!   perspective (the linear predictor is produced upstream).
//! - All failures are immediate typed errors ([`LogitError`]); there is no
//!   retry, partial result, or degraded mode. The outer solver owns
//!   convergence and higher-level failure handling.
//! - Everything is single-threaded, synchronous, call-and-return; parallel
//!   optimization runs must each own a distinct evaluator instance.
//!
//! Conventions
//! -----------
//! - Inputs are oriented `n_samples × n_responses`; gradient and Hessian
//!   outputs are transposed (`n_responses × n_samples`), one row per
//!   response.
//! - The crate performs no I/O and no logging; it is a pure numeric kernel.
//!
//! Downstream usage
//! ----------------
//! - Construct a [`LogitData`] from loaded matrices, one [`LogitLoss`] per
//!   optimization run, then per iteration call `set_linear_predictor` (or
//!   the zero shortcut) followed by any subset of
//!   `{loss_value, gradients, hessian_row}`. After convergence, build a
//!   [`LogitFit`] from the final predictor for reporting.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules
//!   (transform safety, dense/sparse agreement, cache staleness, error
//!   paths) and by the integration suite in `tests/`, which drives full
//!   iteration cycles over all four (design, response) instantiations.
//!
//! [`LogitData`]: crate::logit::LogitData
//! [`LogitLoss`]: crate::logit::LogitLoss
//! [`LogitFit`]: crate::logit::LogitFit
//! [`LogitError`]: crate::logit::LogitError

pub mod logit;
pub mod numerics;
