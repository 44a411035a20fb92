//! Objective functions of L2-regularized linear training problems
//!
//! Each function caches per-instance scores between calls. A trust-region
//! Newton method drives it in the order
//! `evaluate(w) -> gradient(w, g) -> hessian_vector_product(s, hs)*`,
//! always passing the same `w` to `evaluate` and the following `gradient`.
//! Calls out of this order are rejected with [`Error::InvalidState`](crate::Error::InvalidState).
use crate::error::Result;

pub mod l2_loss;
pub mod logistic;
mod params;
pub mod state;
pub mod svc;
pub mod svr;

pub use l2_loss::{ActivityRule, L2rL2LossFunction};
pub use logistic::L2rLrFunction;
pub use params::Params;
pub use state::{CacheState, Fingerprint};
pub use svc::{L2rL2SvcFunction, SquaredHinge};
pub use svr::{EpsilonInsensitive, L2rL2SvrFunction};

/// Objective function `f(w) = 0.5 * w'w + sum_i C_i * loss_i(w'x_i)`
pub trait Function {
    /// Returns the number of variables (the length of the weight vector).
    fn nr_variable(&self) -> usize;

    /// Computes the objective value at `w` and caches the scores `w'x_i`.
    fn evaluate(&mut self, w: &[f64]) -> Result<f64>;

    /// Writes the gradient at `w` into `g`.
    ///
    /// Requires a preceding call of [`Function::evaluate`] with the same `w`.
    fn gradient(&mut self, w: &[f64], g: &mut [f64]) -> Result<()>;

    /// Writes the product of the (generalized) Hessian at the last gradient point with `s` into `hs`.
    ///
    /// Can be called repeatedly after [`Function::gradient`].
    fn hessian_vector_product(&mut self, s: &[f64], hs: &mut [f64]) -> Result<()>;

    /// Returns the current content of the cache.
    fn state(&self) -> CacheState;
}

/// Computes `0.5 * w'w`.
pub(crate) fn regularization(w: &[f64]) -> f64 {
    let mut f = 0.0;
    for wi in w {
        f += wi * wi;
    }
    f / 2.0
}
