//! Call-order guard for the cached per-instance state
use crate::error::{Error, Result};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Hash of the bit patterns of a weight vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Stand-in used when weight verification is disabled.
    pub const UNCHECKED: Fingerprint = Fingerprint(0);

    /// Computes the fingerprint of `w`.
    pub fn of(w: &[f64]) -> Self {
        let mut hasher = DefaultHasher::new();
        w.len().hash(&mut hasher);
        for wi in w {
            wi.to_bits().hash(&mut hasher);
        }
        Fingerprint(hasher.finish())
    }
}

/// Content of the score cache of an objective function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    /// No evaluation has happened yet
    Uninitialized,
    /// Scores `w . x_i` are cached for the fingerprinted weights
    ScoresReady(Fingerprint),
    /// Scores were turned into gradient terms; Hessian-vector products are available
    GradientReady(Fingerprint),
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheState::Uninitialized => write!(f, "Uninitialized"),
            CacheState::ScoresReady(_) => write!(f, "ScoresReady"),
            CacheState::GradientReady(_) => write!(f, "GradientReady"),
        }
    }
}

/// Tracks the [`CacheState`] and rejects calls that would read a stale cache.
#[derive(Clone, Debug)]
pub(crate) struct StateGuard {
    state: CacheState,
    verify_weights: bool,
}

impl StateGuard {
    pub fn new(verify_weights: bool) -> Self {
        Self {
            state: CacheState::Uninitialized,
            verify_weights,
        }
    }

    pub fn state(&self) -> CacheState {
        self.state
    }

    fn fingerprint(&self, w: &[f64]) -> Fingerprint {
        if self.verify_weights {
            Fingerprint::of(w)
        } else {
            Fingerprint::UNCHECKED
        }
    }

    /// Records that the scores for `w` are cached.
    pub fn scores_ready(&mut self, w: &[f64]) {
        self.state = CacheState::ScoresReady(self.fingerprint(w));
    }

    /// Checks that the cached scores belong to `w`.
    pub fn check_gradient(&self, w: &[f64]) -> Result<Fingerprint> {
        match self.state {
            CacheState::ScoresReady(fp) => {
                if fp == self.fingerprint(w) {
                    Ok(fp)
                } else {
                    Err(Error::InvalidState {
                        operation: "gradient",
                        state: format!("{} for a different weight vector", self.state),
                    })
                }
            }
            state => Err(Error::InvalidState {
                operation: "gradient",
                state: state.to_string(),
            }),
        }
    }

    /// Records that the gradient terms for the fingerprinted weights are cached.
    pub fn gradient_ready(&mut self, fp: Fingerprint) {
        self.state = CacheState::GradientReady(fp);
    }

    pub fn check_hessian(&self) -> Result<()> {
        match self.state {
            CacheState::GradientReady(_) => Ok(()),
            state => Err(Error::InvalidState {
                operation: "hessian_vector_product",
                state: state.to_string(),
            }),
        }
    }
}
