//! Numerical stability utilities.
//!
//! Provides a safe implementation of the logistic transform, which is
//! prone to overflow in naïve form: `exp(x)` for large positive `x`
//! leaves `f64` range, and `inf / (1 + inf)` is not finite. The guard
//! here is an explicit, named exponent clip applied *before*
//! exponentiating, so every downstream division stays representable.
//!
//! # Provided items
//! - [`EXP_CLIP`]: the exponent-clipping bound (default 30.0).
//! - [`clip_exponent(x)`]: clamp an exponent argument into
//!   `[-EXP_CLIP, EXP_CLIP]`.
//! - [`safe_logistic(x)`]: stable `exp(x) / (1 + exp(x))`, mapping
//!   ℝ → (0, 1) without overflow and without ever reaching 0.0 or 1.0.
//!
//! # Rationale
//! The logistic link feeds a Bernoulli log-likelihood that takes
//! `log(p)` and `log(1 - p)`. Both logarithms are undefined at the
//! interval endpoints, so the transform must keep its output *strictly*
//! interior to (0, 1) in `f64` arithmetic, not merely finite.

/// Exponent-clipping bound for the logistic transform.
///
/// The binding constraint is not `f64` overflow (which starts near
/// `exp(709)`) but the rounding of the quotient: once `exp(-|x|)` drops
/// below 2⁻⁵³, `exp(x) / (1 + exp(x))` rounds to exactly 1.0 and
/// `log(1 - p)` diverges. At `|x| = 30` the far tail is
/// `1 / (1 + exp(30)) ≈ 9.4e-14`, comfortably above that threshold, so
/// clipped outputs stay strictly inside (0, 1).
pub const EXP_CLIP: f64 = 30.0;

/// Clamp an exponent argument into the safe range `[-EXP_CLIP, EXP_CLIP]`.
///
/// Applied before any `exp` call whose result enters a quotient or a
/// logarithm, so the downstream arithmetic remains finite and interior.
///
/// # Parameters
/// - `x`: real input (finite; non-finite inputs are rejected upstream).
///
/// # Returns
/// - `x` unchanged when `|x| <= EXP_CLIP`, the nearer bound otherwise.
pub fn clip_exponent(x: f64) -> f64 {
    x.clamp(-EXP_CLIP, EXP_CLIP)
}

/// Numerically stable logistic transform: `exp(x) / (1 + exp(x))`.
///
/// Computes the logistic (sigmoid) function with a clipped exponent so
/// that the result is always finite and strictly inside (0, 1). For
/// `|x| <= EXP_CLIP` this agrees with the naïve formula to machine
/// precision; beyond the clip the output saturates at
/// `safe_logistic(±EXP_CLIP)` instead of rounding to 0.0 or 1.0.
///
/// # Parameters
/// - `x`: real input (finite; non-finite inputs are rejected upstream).
///
/// # Returns
/// - `exp(clip(x)) / (1 + exp(clip(x)))` as `f64`, strictly in (0, 1).
pub fn safe_logistic(x: f64) -> f64 {
    let e = clip_exponent(x).exp();
    e / (1.0 + e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of `safe_logistic` with the naïve logistic formula on a
    //   safe input grid.
    // - Strict-interior output bounds under adversarially large magnitudes.
    // - Clipping behavior and basic shape properties (value at 0, symmetry,
    //   monotonicity).
    //
    // They intentionally DO NOT cover:
    // - Non-finite inputs: those are rejected by the link layer before the
    //   transform is applied.
    // - Matrix-level application of the transform (covered by the link and
    //   evaluator tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `safe_logistic` matches `exp(x) / (1 + exp(x))` on inputs
    // well inside the clip range.
    //
    // Given
    // -----
    // - A grid of inputs in [-25, 25].
    //
    // Expect
    // ------
    // - Relative agreement with the naïve formula to 1e-15.
    fn safe_logistic_matches_naive_on_safe_grid() {
        for i in -250..=250 {
            let x = f64::from(i) / 10.0;
            let naive = x.exp() / (1.0 + x.exp());
            assert_relative_eq!(safe_logistic(x), naive, max_relative = 1e-15);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the output stays strictly inside (0, 1) for adversarially large
    // magnitudes, where the naïve formula overflows or rounds to the endpoints.
    //
    // Given
    // -----
    // - Inputs ±1e3, ±1e6, ±1e300, and the f64 extremes.
    //
    // Expect
    // ------
    // - Every output is finite, > 0.0, and < 1.0.
    fn safe_logistic_is_strictly_interior_for_extreme_inputs() {
        let extremes =
            [1e3, -1e3, 1e6, -1e6, 1e300, -1e300, f64::MAX, f64::MIN, f64::MIN_POSITIVE];
        for &x in &extremes {
            let p = safe_logistic(x);
            assert!(p.is_finite(), "safe_logistic({x}) is not finite: {p}");
            assert!(p > 0.0, "safe_logistic({x}) reached 0.0");
            assert!(p < 1.0, "safe_logistic({x}) reached 1.0");
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the fixed point at zero and the symmetry p(x) + p(-x) = 1.
    //
    // Given
    // -----
    // - x = 0 and a handful of nonzero inputs.
    //
    // Expect
    // ------
    // - `safe_logistic(0.0) == 0.5` exactly.
    // - `safe_logistic(x) + safe_logistic(-x) ≈ 1` to 1e-15.
    fn safe_logistic_zero_and_symmetry() {
        assert_eq!(safe_logistic(0.0), 0.5);
        for &x in &[0.3, 1.7, 5.0, 12.0, 29.0] {
            assert_relative_eq!(
                safe_logistic(x) + safe_logistic(-x),
                1.0,
                max_relative = 1e-15
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `clip_exponent` passes interior values through unchanged and
    // clamps values beyond the bound, and that `safe_logistic` saturates at
    // the clipped value rather than drifting past it.
    //
    // Given
    // -----
    // - Inputs inside, at, and beyond ±EXP_CLIP.
    //
    // Expect
    // ------
    // - `clip_exponent` returns its input for |x| <= EXP_CLIP and the nearer
    //   bound otherwise.
    // - `safe_logistic(x) == safe_logistic(EXP_CLIP)` for all x > EXP_CLIP.
    fn clip_exponent_saturates_beyond_bound() {
        // Arrange
        let interior = 12.5;
        let beyond = EXP_CLIP + 100.0;

        // Act / Assert
        assert_eq!(clip_exponent(interior), interior);
        assert_eq!(clip_exponent(-interior), -interior);
        assert_eq!(clip_exponent(beyond), EXP_CLIP);
        assert_eq!(clip_exponent(-beyond), -EXP_CLIP);
        assert_eq!(safe_logistic(beyond), safe_logistic(EXP_CLIP));
        assert_eq!(safe_logistic(-beyond), safe_logistic(-EXP_CLIP));
    }

    #[test]
    // Purpose
    // -------
    // Confirm monotonicity of the transform over an increasing input grid.
    //
    // Given
    // -----
    // - An increasing grid across the clip range.
    //
    // Expect
    // ------
    // - Outputs are non-decreasing (strictly increasing inside the clip).
    fn safe_logistic_is_monotone() {
        let mut prev = safe_logistic(-35.0);
        for i in -340..=340 {
            let p = safe_logistic(f64::from(i) / 10.0);
            assert!(p >= prev, "logistic decreased at x = {}", f64::from(i) / 10.0);
            prev = p;
        }
    }
}
