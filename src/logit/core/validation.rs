//! Logit validation helpers — reusable checks for shapes and sample counts.
//!
//! Purpose
//! -------
//! Centralize the small validation routines used across the logit loss stack.
//! These helpers enforce the fatal-precondition taxonomy of the evaluator:
//! shape disagreements and dimension mismatches are caller bugs surfaced as
//! structured errors, so higher-level constructors and the evaluator can fail
//! fast without duplicating checks.
//!
//! Key behaviors
//! -------------
//! - Validate that a linear predictor matches the `(n_samples, n_responses)`
//!   shape the evaluator was constructed with.
//! - Validate that design and response agree on the number of samples and
//!   that the response is non-empty.
//!
//! Conventions
//! -----------
//! - Validation functions return [`LogitResult`] and never panic on invalid
//!   inputs; panics are reserved for programming errors elsewhere.
//! - Finiteness of predictor *entries* is checked in the link layer, where
//!   the entries are visited anyway; binary response entries are checked by
//!   the representation trait. This module owns the pure shape checks.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on valid and invalid inputs, including
//!   off-by-one shape mismatches and empty responses.
use crate::logit::errors::{LogitError, LogitResult};

/// Validate that a linear predictor has the evaluator's expected shape.
///
/// Parameters
/// ----------
/// - `found`: `(usize, usize)`
///   Shape of the supplied predictor as `(rows, cols)`.
/// - `expected`: `(usize, usize)`
///   The `(n_samples, n_responses)` shape fixed at evaluator construction.
///
/// Returns
/// -------
/// `LogitResult<()>`
///   - `Ok(())` when the shapes match exactly.
///   - `Err(LogitError::PredictorShapeMismatch)` carrying both shapes
///     otherwise.
pub fn validate_predictor_shape(
    found: (usize, usize), expected: (usize, usize),
) -> LogitResult<()> {
    if found != expected {
        return Err(LogitError::PredictorShapeMismatch { expected, found });
    }
    Ok(())
}

/// Validate design/response agreement and response non-emptiness.
///
/// Parameters
/// ----------
/// - `design_rows`: `usize`
///   Number of rows (samples) in the design matrix.
/// - `response_rows`: `usize`
///   Number of rows (samples) in the response matrix.
/// - `n_responses`: `usize`
///   Number of response columns.
///
/// Returns
/// -------
/// `LogitResult<()>`
///   - `Ok(())` when the response is non-empty and both matrices agree on
///     the sample count.
///   - `Err(LogitError::EmptyResponse)` when either response dimension is 0.
///   - `Err(LogitError::DimensionMismatch)` when the sample counts disagree.
pub fn validate_sample_counts(
    design_rows: usize, response_rows: usize, n_responses: usize,
) -> LogitResult<()> {
    if response_rows == 0 || n_responses == 0 {
        return Err(LogitError::EmptyResponse);
    }
    if design_rows != response_rows {
        return Err(LogitError::DimensionMismatch { design_rows, response_rows });
    }
    Ok(())
}
