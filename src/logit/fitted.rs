//! Post-fit presentation of a logistic model: linear predictors and their
//! probabilities.
//!
//! Purpose
//! -------
//! Package the final linear predictor of a fitted multivariate logistic
//! model together with its probability transform for the reporting
//! collaborator. This is a pure data-formatting step: the numeric work
//! happens in the evaluator during the fit, and this type only re-applies
//! the safeguarded link once to the final predictor.
//!
//! Key behaviors
//! -------------
//! - [`LogitFit::from_linear_predictors`] validates finiteness of the final
//!   predictor and derives the probability matrix through the same link the
//!   evaluator used, so reported probabilities match the fit's arithmetic.
//!
//! Conventions
//! -----------
//! - Both matrices are `n_samples × n_responses`, i.e. the caller-facing
//!   orientation, not the evaluator's transposed internal layouts.
//! - The type is a plain immutable container; it performs no I/O and keeps
//!   no reference to the evaluator or the data package.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the link round-trip (probabilities match the scalar
//!   transform of the predictors) and rejection of non-finite predictors.
use crate::logit::{core::link::to_probability, errors::LogitResult};
use ndarray::Array2;

/// Fitted-model presentation: final linear predictors and probabilities.
///
/// Fields
/// ------
/// - `linear_predictors`: `Array2<f64>`
///   Final predictor matrix, `n_samples × n_responses`.
/// - `probabilities`: `Array2<f64>`
///   Logistic transform of the predictors, same shape, entries strictly in
///   (0, 1).
#[derive(Debug, Clone, PartialEq)]
pub struct LogitFit {
    /// Final linear predictors (link scale).
    pub linear_predictors: Array2<f64>,
    /// Predicted probabilities (response scale).
    pub probabilities: Array2<f64>,
}

impl LogitFit {
    /// Build the presentation pair from the final linear predictors.
    ///
    /// Parameters
    /// ----------
    /// - `linear_predictors`: `Array2<f64>`
    ///   Final predictor matrix of the fitted model (owned; consumed).
    ///
    /// Returns
    /// -------
    /// `LogitResult<LogitFit>`
    ///   - `Ok(fit)` with the probability transform attached.
    ///   - `Err(LogitError::NonFinitePredictor)` when any entry is NaN/±inf.
    pub fn from_linear_predictors(linear_predictors: Array2<f64>) -> LogitResult<Self> {
        let probabilities = to_probability(linear_predictors.view())?;
        Ok(LogitFit { linear_predictors, probabilities })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{logit::errors::LogitError, numerics::transformations::safe_logistic};
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction of `LogitFit` and agreement of its probabilities with
    //   the scalar transform of the stored predictors.
    // - Rejection of non-finite predictors.
    //
    // They intentionally DO NOT cover:
    // - Transform internals (transformations and link tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the stored probabilities are the logistic transform of the
    // stored predictors, entry for entry.
    //
    // Given
    // -----
    // - A 2×2 predictor with mixed signs and magnitudes.
    //
    // Expect
    // ------
    // - `probabilities[i][j] == safe_logistic(linear_predictors[i][j])` and
    //   the predictors are stored unchanged.
    fn probabilities_match_stored_predictors() {
        // Arrange
        let lp = array![[0.0, 3.5], [-2.0, 40.0]];

        // Act
        let fit = LogitFit::from_linear_predictors(lp.clone()).expect("finite predictors");

        // Assert
        assert_eq!(fit.linear_predictors, lp);
        for ((i, j), &p) in fit.probabilities.indexed_iter() {
            assert_relative_eq!(p, safe_logistic(lp[[i, j]]), max_relative = 1e-15);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite final predictors are rejected instead of producing a
    // report with NaN probabilities.
    //
    // Given
    // -----
    // - A predictor with +inf at (1, 1).
    //
    // Expect
    // ------
    // - `NonFinitePredictor { row: 1, col: 1, .. }`.
    fn rejects_non_finite_predictors() {
        // Arrange
        let lp = array![[0.0, 1.0], [2.0, f64::INFINITY]];

        // Act
        let err = LogitFit::from_linear_predictors(lp).unwrap_err();

        // Assert
        assert!(matches!(err, LogitError::NonFinitePredictor { row: 1, col: 1, .. }));
    }
}
