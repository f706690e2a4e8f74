//! numerics — numerically robust transformations for the logistic link.
//!
//! Purpose
//! -------
//! Collect the numerical safeguards shared by the logit loss layer: a named
//! exponent-clipping bound and a stable logistic transform. Centralizing the
//! clip constant here keeps every overflow guard in one place so the rest of
//! the crate can assume well-conditioned `f64` arithmetic.
//!
//! Key behaviors
//! -------------
//! - Provide [`safe_logistic`] for mapping unconstrained reals into strictly
//!   interior (0, 1) probabilities without overflow.
//! - Expose [`clip_exponent`] and the shared bound [`EXP_CLIP`] so callers
//!   that need the raw clamp (e.g., tests, diagnostics) use the same constant
//!   as the transform itself.
//!
//! Invariants & assumptions
//! ------------------------
//! - All transforms assume finite `f64` inputs; finiteness validation is
//!   enforced in the logit link layer, not here.
//! - `safe_logistic` output is finite and strictly inside (0, 1) for every
//!   finite input; downstream logarithms of `p` and `1 - p` are therefore
//!   always defined.
//!
//! Conventions
//! -----------
//! - Scalar helpers only; matrix-level application lives in the logit layer.
//! - This module never logs, performs I/O, or touches global state; it is
//!   pure numerical helpers suitable for use inside tight inner loops.
//!
//! Downstream usage
//! ----------------
//! - The logit link maps linear predictors to probabilities element-wise via
//!   [`safe_logistic`].
//! - Higher-level code should depend on the re-exported surface (constant and
//!   transforms) or the prelude, not on internals of [`transformations`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with the naïve
//!   formula on safe grids, strict-interior bounds under extreme magnitudes,
//!   clipping/saturation behavior, symmetry, and monotonicity.
//! - Matrix-level behavior is exercised by the link and evaluator tests.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{EXP_CLIP, clip_exponent, safe_logistic};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use sgl_logit::numerics::prelude::*;
//
// to import the numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{EXP_CLIP, clip_exponent, safe_logistic};
}
