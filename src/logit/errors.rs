//! Errors for the multivariate logit loss layer (data validation, predictor
//! shape checks, and numeric-safety violations).
//!
//! This module defines a single error type, [`LogitError`], used across the
//! data package, the probability link, and the evaluator. It implements
//! `Display`/`Error` with structured payloads so callers can report the exact
//! offending position and value.
//!
//! ## Conventions
//! - **Indices are 0-based** and reported as `(row, col)` in the sample ×
//!   response orientation of the input matrices.
//! - Response entries must be **exactly 0.0 or 1.0**; anything else is a
//!   loader-side precondition violation surfaced at construction time.
//! - All failures are immediate and unrecoverable within this crate: there is
//!   no retry, no partial result, and no degraded mode. The outer solver owns
//!   higher-level convergence/failure concerns.

/// Crate-wide result alias for logit-loss operations that may produce
/// [`LogitError`].
pub type LogitResult<T> = Result<T, LogitError>;

/// Unified error type for the logit loss layer.
///
/// Covers input/data validation at construction, per-iteration predictor
/// checks, accessor bounds, and defensive numeric-safety checks. Implements
/// `Display`/`Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum LogitError {
    // ---- Input/data validation ----
    /// Response matrix has zero rows or zero columns.
    EmptyResponse,

    /// Design and response disagree on the number of samples.
    DimensionMismatch { design_rows: usize, response_rows: usize },

    /// A stored response entry is not exactly 0.0 or 1.0.
    NonBinaryResponse { row: usize, col: usize, value: f64 },

    // ---- Per-iteration predictor checks ----
    /// Linear predictor shape differs from (n_samples, n_responses).
    PredictorShapeMismatch { expected: (usize, usize), found: (usize, usize) },

    /// A linear-predictor entry is NaN/±inf.
    NonFinitePredictor { row: usize, col: usize, value: f64 },

    // ---- Accessors ----
    /// Hessian row index is outside `0..n_responses`.
    ResponseIndexOutOfRange { index: usize, n_responses: usize },

    // ---- Numeric safety ----
    /// The accumulated loss value is NaN/±inf.
    NonFiniteLoss { value: f64 },
}

impl std::error::Error for LogitError {}

impl std::fmt::Display for LogitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            LogitError::EmptyResponse => {
                write!(f, "Response matrix must have at least one sample and one response.")
            }
            LogitError::DimensionMismatch { design_rows, response_rows } => {
                write!(
                    f,
                    "Design matrix has {design_rows} rows but response matrix has \
                     {response_rows} samples."
                )
            }
            LogitError::NonBinaryResponse { row, col, value } => {
                write!(
                    f,
                    "Response entry at ({row}, {col}) must be exactly 0 or 1; got: {value}"
                )
            }
            // ---- Per-iteration predictor checks ----
            LogitError::PredictorShapeMismatch { expected, found } => {
                write!(
                    f,
                    "Linear predictor must have shape ({}, {}); got: ({}, {}).",
                    expected.0, expected.1, found.0, found.1
                )
            }
            LogitError::NonFinitePredictor { row, col, value } => {
                write!(
                    f,
                    "Linear predictor entry at ({row}, {col}) is non-finite: {value}"
                )
            }
            // ---- Accessors ----
            LogitError::ResponseIndexOutOfRange { index, n_responses } => {
                write!(
                    f,
                    "Hessian row index {index} is out of range for {n_responses} responses."
                )
            }
            // ---- Numeric safety ----
            LogitError::NonFiniteLoss { value } => {
                write!(f, "Accumulated loss value is non-finite: {value}")
            }
        }
    }
}
