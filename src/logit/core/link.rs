//! Probability link for the logit loss: linear predictor → bounded
//! probabilities.
//!
//! ## What this module does
//! - [`to_probability`] maps a linear-predictor matrix element-wise through
//!   the safeguarded logistic transform, failing fast on any non-finite
//!   input entry *before* touching evaluator state.
//! - [`zero_probability`] returns the closed-form probability matrix of an
//!   all-zero predictor (constant 0.5), used to initialize evaluator state
//!   and to implement the zero-predictor shortcut without exponentials.
//!
//! ## Postconditions
//! Every output entry is finite and strictly inside (0, 1), so the Bernoulli
//! log-likelihood downstream never evaluates `log(0)`. A non-finite predictor
//! is a precondition failure surfaced as a typed error, never absorbed into a
//! NaN probability: a poisoned matrix would silently corrupt the outer
//! solver's convergence and is far harder to diagnose later.
use crate::{
    logit::errors::{LogitError, LogitResult},
    numerics::transformations::safe_logistic,
};
use ndarray::{Array2, ArrayView2};

/// Map a linear predictor to probabilities in the open interval (0, 1).
///
/// Applies [`safe_logistic`] element-wise after rejecting non-finite input:
/// `p = exp(clip(x)) / (1 + exp(clip(x)))`.
///
/// # Arguments
/// - `linear_predictor`: matrix view, `n_samples × n_responses`.
///
/// # Returns
/// - A freshly allocated probability matrix of the same shape with every
///   entry finite and strictly between 0 and 1.
///
/// # Errors
/// - [`LogitError::NonFinitePredictor`] with the first offending position
///   and value. On error no probabilities are produced.
pub fn to_probability(linear_predictor: ArrayView2<'_, f64>) -> LogitResult<Array2<f64>> {
    for ((row, col), &value) in linear_predictor.indexed_iter() {
        if !value.is_finite() {
            return Err(LogitError::NonFinitePredictor { row, col, value });
        }
    }
    Ok(linear_predictor.mapv(safe_logistic))
}

/// Probability matrix of the all-zero predictor: constant 0.5.
///
/// The logistic transform of zero is exactly one half, so this closed form
/// skips the exponentials entirely.
///
/// # Arguments
/// - `n_samples`, `n_responses`: target shape.
pub fn zero_probability(n_samples: usize, n_responses: usize) -> Array2<f64> {
    Array2::from_elem((n_samples, n_responses), 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Element-wise correctness of `to_probability` against the scalar
    //   transform, including extreme magnitudes.
    // - Fail-fast rejection of NaN/±inf predictor entries with positions.
    // - The closed-form `zero_probability` matrix.
    //
    // They intentionally DO NOT cover:
    // - Scalar clipping details (transformations tests).
    // - Cache interaction after a rejected update (evaluator tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify element-wise agreement with `safe_logistic` and strict-interior
    // output under large predictor magnitudes.
    //
    // Given
    // -----
    // - A 2×3 predictor mixing moderate and extreme values.
    //
    // Expect
    // ------
    // - Each output entry equals `safe_logistic` of the input and lies
    //   strictly inside (0, 1).
    fn to_probability_matches_scalar_transform() {
        // Arrange
        let lp = array![[0.0, 2.5, -1e6], [1e6, -0.75, 300.0]];

        // Act
        let prob = to_probability(lp.view()).expect("finite predictor should transform");

        // Assert
        for ((i, j), &p) in prob.indexed_iter() {
            assert_relative_eq!(p, safe_logistic(lp[[i, j]]), max_relative = 1e-15);
            assert!(p > 0.0 && p < 1.0, "probability at ({i}, {j}) not interior: {p}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite predictor entries are rejected with the offending
    // position, for NaN and both infinities.
    //
    // Given
    // -----
    // - Predictors with NaN at (0, 1), +inf at (1, 0), and -inf at (0, 0).
    //
    // Expect
    // ------
    // - `NonFinitePredictor` carrying the matching (row, col).
    fn to_probability_rejects_non_finite_entries() {
        let cases = [
            (array![[0.0, f64::NAN], [1.0, 2.0]], (0, 1)),
            (array![[0.0, 1.0], [f64::INFINITY, 2.0]], (1, 0)),
            (array![[f64::NEG_INFINITY, 1.0], [0.0, 2.0]], (0, 0)),
        ];
        for (lp, expected_pos) in cases {
            let err = to_probability(lp.view()).unwrap_err();
            match err {
                LogitError::NonFinitePredictor { row, col, .. } => {
                    assert_eq!((row, col), expected_pos);
                }
                other => panic!("expected NonFinitePredictor, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero-predictor closed form: a constant 0.5 matrix of the
    // requested shape, bit-identical to transforming an explicit zero matrix.
    //
    // Given
    // -----
    // - Shape (3, 2).
    //
    // Expect
    // ------
    // - Every entry is exactly 0.5 and matches `to_probability(zeros)`.
    fn zero_probability_is_exact_half() {
        // Arrange
        let shape = (3, 2);

        // Act
        let closed_form = zero_probability(shape.0, shape.1);
        let explicit =
            to_probability(Array2::zeros(shape).view()).expect("zero matrix is finite");

        // Assert
        assert_eq!(closed_form.dim(), shape);
        for (&a, &b) in closed_form.iter().zip(explicit.iter()) {
            assert_eq!(a.to_bits(), 0.5f64.to_bits());
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
