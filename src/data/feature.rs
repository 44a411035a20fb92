//! Sparse feature record
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A nonzero entry of a sparse feature vector.
///
/// Indices are 1-based; index `0` never addresses a weight. The dense
/// position of a feature in a weight or gradient buffer is [`Feature::offset`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Feature {
    index: usize,
    value: f64,
}

impl Feature {
    /// Creates a [`Feature`] with the given (1-based) index and value.
    pub const fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }

    /// Returns the 1-based feature index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the position of this feature in a dense buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.index - 1
    }

    /// Returns the feature value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the feature value.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

// values compare by bit pattern
impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for Feature {}

impl Hash for Feature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.value.to_bits().hash(state);
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Feature(idx={}, value={})", self.index, self.value)
    }
}
