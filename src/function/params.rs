use serde::{Deserialize, Serialize};

/// Common parameters of an objective function
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Check that `gradient` receives the weight vector last passed to `evaluate`
    pub verify_weights: bool,
    /// Width of the insensitive zone of the regression loss
    pub epsilon: f64,
}

impl Params {
    const DEFAULT_VERIFY_WEIGHTS: bool = true;
    const DEFAULT_EPSILON: f64 = 0.1;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            verify_weights: Self::DEFAULT_VERIFY_WEIGHTS,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }

    /// Enables or disables the weight vector check.
    pub fn with_verify_weights(mut self, verify_weights: bool) -> Self {
        self.verify_weights = verify_weights;
        self
    }

    /// Sets the width of the insensitive zone.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
