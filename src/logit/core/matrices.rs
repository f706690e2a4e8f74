//! Representation traits for the logit loss: dense and sparse matrices with
//! one contract.
//!
//! The evaluator is generic over two independent storage axes — the design
//! matrix and the response matrix — each either dense (`ndarray::Array2`) or
//! compressed sparse (`sprs::CsMat`). Probabilities and Hessians are always
//! dense (the logistic link densifies), so the only axis that matters
//! *inside* the evaluator is the response representation; the design axis is
//! shape-only and exists because the enclosing objective framework is generic
//! over both.
//!
//! ## Response contract
//! Iterate all positions of the dense probability matrix `P`; for positions
//! stored in `Y`, combine with `Y`'s value; positions absent from a sparse
//! `Y` combine with an implicit zero. Concretely:
//! - [`ResponseMatrix::residual_transposed`] — `(P − Y)ᵗ`, one row per
//!   response. Implicit zeros subtract nothing from `Pᵗ`.
//! - [`ResponseMatrix::log_likelihood`] — `Σ y·log p − y·log(1−p) + log(1−p)`
//!   over all positions. Implicit zeros contribute `log(1−p)` only.
//!
//! Both implementations must agree numerically for the same logical matrix;
//! the unit tests below check dense/sparse agreement directly.
//!
//! ## Orientation
//! Inputs are `n_samples × n_responses`; residual and Hessian outputs are
//! transposed (`n_responses × n_samples`) to match the outer solver's
//! per-response block layout.
use crate::logit::errors::{LogitError, LogitResult};
use ndarray::{Array2, Zip};
use sprs::CsMat;

/// Shape queries for a design-matrix representation.
///
/// The evaluator never reads design values; the linear predictor is produced
/// further upstream. This trait exists so the data package can check sample
/// counts and so the evaluator specializes per (design, response) pair like
/// the surrounding objective framework.
pub trait DesignMatrix {
    /// Number of samples (rows).
    fn n_rows(&self) -> usize;
    /// Number of variables (columns).
    fn n_cols(&self) -> usize;
}

impl DesignMatrix for Array2<f64> {
    fn n_rows(&self) -> usize {
        self.nrows()
    }

    fn n_cols(&self) -> usize {
        self.ncols()
    }
}

impl DesignMatrix for CsMat<f64> {
    fn n_rows(&self) -> usize {
        self.rows()
    }

    fn n_cols(&self) -> usize {
        self.cols()
    }
}

/// Representation-agnostic access to a 0/1 response matrix.
///
/// Implementations combine a dense probability matrix `P` with the stored
/// entries of `Y`, treating positions absent from a sparse `Y` as implicit
/// zeros. All methods are read-only; the response is immutable for the life
/// of the evaluator.
///
/// # Invariants (enforced by [`LogitData`](crate::logit::core::data::LogitData))
/// - Every stored entry is exactly 0.0 or 1.0.
/// - `P` passed to the combine methods has shape `(n_samples, n_responses)`
///   with every entry strictly inside (0, 1).
pub trait ResponseMatrix {
    /// Number of samples (rows).
    fn n_samples(&self) -> usize;

    /// Number of responses (columns).
    fn n_responses(&self) -> usize;

    /// Residual `(P − Y)ᵗ`, shape `(n_responses, n_samples)`.
    ///
    /// This is the gradient of the negative Bernoulli log-likelihood with
    /// respect to the linear predictor, in transposed layout: row `j` holds
    /// the per-sample residuals of response `j`.
    fn residual_transposed(&self, prob: &Array2<f64>) -> Array2<f64>;

    /// Bernoulli log-likelihood sum `Σ y·log p − y·log(1−p) + log(1−p)`.
    ///
    /// The negative of this sum is the loss. The rearrangement groups the
    /// `y`-weighted terms so a sparse response only visits its stored
    /// entries on top of one dense pass over `log(1−p)`.
    fn log_likelihood(&self, prob: &Array2<f64>) -> f64;

    /// Check that every stored entry is exactly 0.0 or 1.0.
    ///
    /// # Errors
    /// - [`LogitError::NonBinaryResponse`] with the first offending position
    ///   and value.
    fn validate_binary(&self) -> LogitResult<()>;
}

impl ResponseMatrix for Array2<f64> {
    fn n_samples(&self) -> usize {
        self.nrows()
    }

    fn n_responses(&self) -> usize {
        self.ncols()
    }

    fn residual_transposed(&self, prob: &Array2<f64>) -> Array2<f64> {
        debug_assert_eq!(self.dim(), prob.dim());
        (prob - self).reversed_axes()
    }

    fn log_likelihood(&self, prob: &Array2<f64>) -> f64 {
        debug_assert_eq!(self.dim(), prob.dim());
        Zip::from(self).and(prob).fold(0.0, |acc, &y, &p| {
            debug_assert!(y == 0.0 || y == 1.0, "non-binary response entry: {y}");
            acc + y * p.ln() - y * (1.0 - p).ln() + (1.0 - p).ln()
        })
    }

    fn validate_binary(&self) -> LogitResult<()> {
        for ((row, col), &value) in self.indexed_iter() {
            if value != 0.0 && value != 1.0 {
                return Err(LogitError::NonBinaryResponse { row, col, value });
            }
        }
        Ok(())
    }
}

impl ResponseMatrix for CsMat<f64> {
    fn n_samples(&self) -> usize {
        self.rows()
    }

    fn n_responses(&self) -> usize {
        self.cols()
    }

    fn residual_transposed(&self, prob: &Array2<f64>) -> Array2<f64> {
        debug_assert_eq!((self.rows(), self.cols()), prob.dim());
        // Implicit zeros leave Pᵗ untouched; stored ones subtract in place.
        let mut residual = prob.t().to_owned();
        for (&y, (row, col)) in self.iter() {
            debug_assert!(y == 0.0 || y == 1.0, "non-binary response entry: {y}");
            residual[[col, row]] -= y;
        }
        residual
    }

    fn log_likelihood(&self, prob: &Array2<f64>) -> f64 {
        debug_assert_eq!((self.rows(), self.cols()), prob.dim());
        // One dense pass for the implicit-zero term, then the stored entries
        // add their y-weighted log-odds on top.
        let base: f64 = prob.iter().map(|&p| (1.0 - p).ln()).sum();
        self.iter().fold(base, |acc, (&y, (row, col))| {
            debug_assert!(y == 0.0 || y == 1.0, "non-binary response entry: {y}");
            let p = prob[[row, col]];
            acc + y * (p.ln() - (1.0 - p).ln())
        })
    }

    fn validate_binary(&self) -> LogitResult<()> {
        for (&value, (row, col)) in self.iter() {
            if value != 0.0 && value != 1.0 {
                return Err(LogitError::NonBinaryResponse { row, col, value });
            }
        }
        Ok(())
    }
}
