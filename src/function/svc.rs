//! L2-regularized squared-hinge support vector classification
use super::l2_loss::{ActivityRule, L2rL2LossFunction};
use super::Params;
use crate::data::Dataset;
use crate::error::Result;

/// Squared hinge loss `max(0, 1 - y z)^2`; instances with `y z < 1` are active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SquaredHinge;

impl ActivityRule for SquaredHinge {
    #[inline]
    fn residual(&self, yi: f64, zi: f64) -> Option<f64> {
        let yz = yi * zi;
        if yz < 1.0 {
            Some(yi * (yz - 1.0))
        } else {
            None
        }
    }

    fn loss(&self, yi: f64, zi: f64) -> f64 {
        let d = 1.0 - yi * zi;
        if d > 0.0 {
            d * d
        } else {
            0.0
        }
    }
}

/// Objective `0.5 * w'w + sum_i C_i * max(0, 1 - y_i w'x_i)^2`
pub type L2rL2SvcFunction<'a> = L2rL2LossFunction<'a, SquaredHinge>;

impl<'a> L2rL2LossFunction<'a, SquaredHinge> {
    /// Creates a [`L2rL2SvcFunction`] with default parameters.
    ///
    /// * `data`: training data with labels `+1`/`-1`
    /// * `c`: cost weight of each instance
    pub fn new(data: &'a Dataset, c: &'a [f64]) -> Result<Self> {
        Self::with_params(data, c, &Params::new())
    }

    /// Creates a [`L2rL2SvcFunction`] with the given parameters.
    pub fn with_params(data: &'a Dataset, c: &'a [f64], params: &Params) -> Result<Self> {
        Self::with_rule(data, c, SquaredHinge, params)
    }
}
