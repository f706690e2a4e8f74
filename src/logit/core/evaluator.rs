//! Multivariate logit loss evaluator: probabilities, gradient, diagonal
//! Hessian, and loss value for one optimization run.
//!
//! This module wires the response representation traits to the stateful
//! per-iteration kernel the outer sparse-group-lasso solver drives. The
//! evaluator owns the probability matrix and two lazily filled caches and
//! guarantees that no accessor can ever observe a stale derived quantity.
//!
//! Key ideas:
//! - Probabilities are recomputed eagerly on every predictor update through
//!   the safeguarded link; both caches are cleared *unconditionally* on every
//!   update, not just on value change — re-deriving is cheap relative to a
//!   wrong stale read.
//! - Caches are `Option` values behind interior mutability (the same pattern
//!   as reusable scratch buffers elsewhere in this stack): `None` means both
//!   "never computed" and "stale", so a validity flag cannot drift out of
//!   sync with the cached value.
//! - The Hessian is the diagonal Bernoulli-variance approximation `p(1 − p)`
//!   per observation; cross-response and cross-sample second-order terms are
//!   ignored by design.
//! - Genericity over the (design, response) representation pair yields four
//!   instantiations with identical contracts, mirroring the objective
//!   framework this evaluator plugs into.
use crate::logit::{
    core::{
        data::LogitData,
        link::{to_probability, zero_probability},
        matrices::{DesignMatrix, ResponseMatrix},
        validation::validate_predictor_shape,
    },
    errors::{LogitError, LogitResult},
};
use ndarray::{Array1, Array2, ArrayView2};
use sprs::CsMat;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

/// Stateful loss evaluator for the multivariate logistic model.
///
/// Binds a response matrix for its lifetime and turns each linear predictor
/// supplied by the optimizer into probabilities, a gradient, a per-response
/// diagonal Hessian, and a scalar negative log-likelihood.
///
/// # State machine
/// - Any `set_linear_predictor*` call recomputes probabilities and clears
///   both caches, from any state.
/// - [`ensure_hessians`](Self::ensure_hessians) and
///   [`loss_value`](Self::loss_value) each fill their cache on first demand
///   after an update; no terminal state, the evaluator cycles for the life
///   of the run.
///
/// # Concurrency
/// Single-threaded by design: the caches use `Cell`/`RefCell`, so the type is
/// deliberately `!Sync`. One optimizer thread drives one evaluator; parallel
/// runs each own a distinct instance.
#[derive(Debug)]
pub struct LogitLoss<'a, X, Y> {
    n_samples: usize,
    n_responses: usize,
    /// Response matrix, borrowed from the data package for the whole run.
    response: &'a Y,
    /// Probabilities at the current predictor; never exposed directly.
    prob: Array2<f64>,
    /// Diagonal Hessian `(P − P²)ᵗ`, filled on first demand after an update.
    hessian: RefCell<Option<Array2<f64>>>,
    /// Loss value at the current predictor, filled on first demand.
    loss: Cell<Option<f64>>,
    design: PhantomData<X>,
}

impl<'a, X: DesignMatrix, Y: ResponseMatrix> LogitLoss<'a, X, Y> {
    /// Construct an evaluator bound to a validated data package.
    ///
    /// Probabilities start at the zero-predictor closed form (constant 0.5)
    /// and both caches start empty, so derived quantities are well-defined
    /// before the first real predictor arrives.
    ///
    /// # Arguments
    /// - `data`: validated (design, response) package; the evaluator borrows
    ///   the response for its whole lifetime.
    pub fn new(data: &'a LogitData<X, Y>) -> Self {
        LogitLoss {
            n_samples: data.n_samples,
            n_responses: data.n_responses,
            response: &data.response,
            prob: zero_probability(data.n_samples, data.n_responses),
            hessian: RefCell::new(None),
            loss: Cell::new(None),
            design: PhantomData,
        }
    }

    /// Number of samples (rows of the predictor and response).
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of responses (columns of the predictor and response).
    pub fn n_responses(&self) -> usize {
        self.n_responses
    }

    /// Ingest a new linear predictor and recompute probabilities.
    ///
    /// # Behavior
    /// - Validates the predictor shape against `(n_samples, n_responses)`.
    /// - Recomputes the probability matrix through the safeguarded link.
    /// - Unconditionally clears the Hessian and loss caches — on every call,
    ///   even when the numeric values did not change.
    ///
    /// # Errors
    /// - [`LogitError::PredictorShapeMismatch`] on shape disagreement.
    /// - [`LogitError::NonFinitePredictor`] when any entry is NaN/±inf.
    ///   On either error the previous probabilities and caches are left
    ///   intact.
    pub fn set_linear_predictor(
        &mut self, linear_predictor: ArrayView2<'_, f64>,
    ) -> LogitResult<()> {
        validate_predictor_shape(
            linear_predictor.dim(),
            (self.n_samples, self.n_responses),
        )?;
        self.prob = to_probability(linear_predictor)?;
        self.invalidate();
        Ok(())
    }

    /// Reset to the all-zero predictor without computing exponentials.
    ///
    /// Numerically equivalent to `set_linear_predictor` with a zero matrix:
    /// probabilities become exactly 0.5 and both caches are cleared.
    pub fn set_linear_predictor_zero(&mut self) {
        self.prob.fill(0.5);
        self.invalidate();
    }

    /// Gradient of the loss w.r.t. the linear predictor: `-(Y − P)ᵗ`.
    ///
    /// Shape `(n_responses, n_samples)` — row `j` holds the per-sample
    /// residuals of response `j`. Recomputed on each call, never cached:
    /// it is cheap relative to the Hessian and loss, and the optimizer reads
    /// it at most once per iteration.
    pub fn gradients(&self) -> Array2<f64> {
        self.response.residual_transposed(&self.prob)
    }

    /// Fill the Hessian cache if it is stale or absent; no-op otherwise.
    ///
    /// Computes `H = (P − P²)ᵗ`, the per-observation Bernoulli variance
    /// `p(1 − p)` in transposed layout (row per response). This is the
    /// diagonal curvature approximation the outer solver's proximal steps
    /// consume; off-diagonal terms are ignored by design.
    pub fn ensure_hessians(&self) {
        let mut cache = self.hessian.borrow_mut();
        if cache.is_none() {
            *cache = Some(self.prob.mapv(|p| p * (1.0 - p)).reversed_axes());
        }
    }

    /// Cached Hessian row for response `index`: one curvature per sample.
    ///
    /// Fills the cache first when needed, so callers are not required to
    /// invoke [`ensure_hessians`](Self::ensure_hessians) themselves.
    ///
    /// # Errors
    /// - [`LogitError::ResponseIndexOutOfRange`] when
    ///   `index >= n_responses`.
    pub fn hessian_row(&self, index: usize) -> LogitResult<Array1<f64>> {
        if index >= self.n_responses {
            return Err(LogitError::ResponseIndexOutOfRange {
                index,
                n_responses: self.n_responses,
            });
        }
        self.ensure_hessians();
        let cache = self.hessian.borrow();
        let hessian = cache.as_ref().expect("cache filled by ensure_hessians");
        Ok(hessian.row(index).to_owned())
    }

    /// Negative Bernoulli log-likelihood at the current predictor.
    ///
    /// Returns the cached scalar when current; otherwise computes
    /// `L = −Σ [y·log p − y·log(1−p) + log(1−p)]`, caches it, and returns
    /// it. Repeated calls without an intervening predictor update return
    /// the bit-identical cached value.
    ///
    /// # Errors
    /// - [`LogitError::NonFiniteLoss`] when the accumulated sum is NaN/±inf.
    ///   Structurally unreachable while the link's strict-interior
    ///   postcondition holds, but a poisoned scalar would silently corrupt
    ///   the outer solver, so the scalar is checked before caching.
    pub fn loss_value(&self) -> LogitResult<f64> {
        if let Some(value) = self.loss.get() {
            return Ok(value);
        }
        let value = -self.response.log_likelihood(&self.prob);
        if !value.is_finite() {
            return Err(LogitError::NonFiniteLoss { value });
        }
        self.loss.set(Some(value));
        Ok(value)
    }

    /// Clear both caches. Every predictor-mutation path funnels through
    /// here, which makes invalidation exhaustive by construction.
    fn invalidate(&mut self) {
        self.hessian.replace(None);
        self.loss.set(None);
    }
}

// ---- Instantiations over the (design, response) representation pair -------
//
// The four combinations the enclosing objective framework is generic over.
// Identical external contract; they differ only in storage and in how the
// response combines with the dense probability matrix.

/// Dense design, dense response.
pub type LogitDense<'a> = LogitLoss<'a, Array2<f64>, Array2<f64>>;

/// Sparse design, dense response.
pub type LogitSparseDesign<'a> = LogitLoss<'a, CsMat<f64>, Array2<f64>>;

/// Dense design, sparse response.
pub type LogitSparseResponse<'a> = LogitLoss<'a, Array2<f64>, CsMat<f64>>;

/// Sparse design, sparse response.
pub type LogitSparseBoth<'a> = LogitLoss<'a, CsMat<f64>, CsMat<f64>>;
