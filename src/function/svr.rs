//! L2-regularized squared epsilon-insensitive support vector regression
use super::l2_loss::{ActivityRule, L2rL2LossFunction};
use super::Params;
use crate::data::Dataset;
use crate::error::{Error, Result};

/// Squared epsilon-insensitive loss `max(0, |z - y| - epsilon)^2`; instances outside the tube are active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpsilonInsensitive {
    /// Half width of the insensitive zone
    pub epsilon: f64,
}

impl EpsilonInsensitive {
    /// Creates the rule, rejecting a negative (or NaN) `epsilon`.
    pub fn new(epsilon: f64) -> Result<Self> {
        if epsilon >= 0.0 {
            Ok(Self { epsilon })
        } else {
            Err(Error::InvalidParameter(format!(
                "epsilon must be non-negative, got {epsilon}"
            )))
        }
    }
}

impl ActivityRule for EpsilonInsensitive {
    #[inline]
    fn residual(&self, yi: f64, zi: f64) -> Option<f64> {
        let d = zi - yi;
        if d < -self.epsilon {
            Some(d + self.epsilon)
        } else if d > self.epsilon {
            Some(d - self.epsilon)
        } else {
            None
        }
    }
}

/// Objective `0.5 * w'w + sum_i C_i * max(0, |w'x_i - y_i| - epsilon)^2`
pub type L2rL2SvrFunction<'a> = L2rL2LossFunction<'a, EpsilonInsensitive>;

impl<'a> L2rL2LossFunction<'a, EpsilonInsensitive> {
    /// Creates a [`L2rL2SvrFunction`].
    ///
    /// * `data`: training data with real-valued targets
    /// * `c`: cost weight of each instance
    /// * `epsilon`: half width of the insensitive zone
    pub fn new(data: &'a Dataset, c: &'a [f64], epsilon: f64) -> Result<Self> {
        Self::with_params(data, c, &Params::new().with_epsilon(epsilon))
    }

    /// Creates a [`L2rL2SvrFunction`] taking `epsilon` from the parameters.
    pub fn with_params(data: &'a Dataset, c: &'a [f64], params: &Params) -> Result<Self> {
        let rule = EpsilonInsensitive::new(params.epsilon)?;
        Self::with_rule(data, c, rule, params)
    }

    /// Returns the half width of the insensitive zone.
    pub fn epsilon(&self) -> f64 {
        self.rule().epsilon
    }
}
