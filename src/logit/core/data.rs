//! Data package for the logit loss — validated (design, response) pair.
//!
//! Purpose
//! -------
//! Provide a small, validated container binding a design matrix and a 0/1
//! response matrix for multivariate logistic regression. This module
//! centralizes the loader-side preconditions of the evaluator so downstream
//! code can assume clean, consistently shaped inputs.
//!
//! Key behaviors
//! -------------
//! - [`LogitData`] enforces the data invariants at construction: non-empty
//!   response, design/response agreement on the sample count, and response
//!   entries that are exactly 0 or 1.
//! - Generic over both representation axes: the design and the response can
//!   each be dense (`ndarray::Array2<f64>`) or sparse (`sprs::CsMat<f64>`),
//!   giving the four instantiations the enclosing objective framework needs.
//!
//! Invariants & assumptions
//! ------------------------
//! - `design.n_rows() == response.n_samples()` and both are > 0.
//! - Every stored response entry is exactly 0.0 or 1.0; sparse responses may
//!   additionally carry implicit zeros.
//! - The package is immutable after construction; the evaluator borrows the
//!   response for its whole lifetime and never mutates it.
//!
//! Conventions
//! -----------
//! - Matrices are oriented samples × columns (`n_samples × n_variables` for
//!   the design, `n_samples × n_responses` for the response), 0-based.
//! - The design values are never read by this crate; the linear predictor is
//!   produced by the upstream collaborator that owns the design arithmetic.
//!
//! Downstream usage
//! ----------------
//! - Construct [`LogitData`] once where raw matrices enter the solver, then
//!   hand a reference to [`LogitLoss::new`](crate::logit::core::evaluator::LogitLoss)
//!   at the start of each optimization run.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and each rejection (empty response,
//!   sample-count mismatch, non-binary entry) for mixed representations.
use crate::logit::{
    core::{
        matrices::{DesignMatrix, ResponseMatrix},
        validation::validate_sample_counts,
    },
    errors::LogitResult,
};

/// `LogitData` — validated (design, response) pair for one optimization run.
///
/// Purpose
/// -------
/// Represent the immutable inputs of a multivariate logistic fit: the design
/// matrix consumed upstream by the linear-predictor producer, and the 0/1
/// response matrix consumed by the loss evaluator. Construction validates the
/// invariants once so every later iteration can skip them.
///
/// Fields
/// ------
/// - `design`: `X`
///   Design matrix, `n_samples × n_variables`. Shape-only from this crate's
///   perspective.
/// - `response`: `Y`
///   Response matrix, `n_samples × n_responses`, entries in {0, 1}.
/// - `n_samples`: `usize`
///   Shared row count of both matrices.
/// - `n_responses`: `usize`
///   Number of response columns.
///
/// Invariants
/// ----------
/// - `n_samples > 0` and `n_responses > 0`.
/// - `design.n_rows() == response.n_samples() == n_samples`.
/// - Every stored response entry is exactly 0.0 or 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct LogitData<X, Y> {
    /// Design matrix (shape-only here; consumed upstream).
    pub design: X,
    /// 0/1 response matrix.
    pub response: Y,
    /// Number of samples shared by design and response.
    pub n_samples: usize,
    /// Number of response columns.
    pub n_responses: usize,
}

impl<X: DesignMatrix, Y: ResponseMatrix> LogitData<X, Y> {
    /// Construct a validated data package from a design and a response.
    ///
    /// Parameters
    /// ----------
    /// - `design`: `X`
    ///   Design matrix, `n_samples × n_variables` (dense or sparse).
    /// - `response`: `Y`
    ///   Response matrix, `n_samples × n_responses` (dense or sparse) with
    ///   entries in {0, 1}.
    ///
    /// Returns
    /// -------
    /// `LogitResult<LogitData<X, Y>>`
    ///   - `Ok(data)` when all invariants hold.
    ///   - `Err(LogitError::EmptyResponse)` when the response has no rows or
    ///     no columns.
    ///   - `Err(LogitError::DimensionMismatch)` when the design and response
    ///     disagree on the sample count.
    ///   - `Err(LogitError::NonBinaryResponse)` when a stored response entry
    ///     is not exactly 0 or 1 (first offender reported).
    ///
    /// Notes
    /// -----
    /// - Binary validation is a single scan over the stored entries and runs
    ///   once here; the per-iteration hot paths only `debug_assert!` it.
    pub fn new(design: X, response: Y) -> LogitResult<Self> {
        validate_sample_counts(design.n_rows(), response.n_samples(), response.n_responses())?;
        response.validate_binary()?;
        let n_samples = response.n_samples();
        let n_responses = response.n_responses();
        Ok(LogitData { design, response, n_samples, n_responses })
    }
}
