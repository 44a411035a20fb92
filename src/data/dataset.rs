//! Training dataset
use super::Feature;
use crate::error::{check_len, Error, Result};
use ndarray::Array2;

/// Sparse training data together with its targets.
///
/// For example, the training data
/// ```text
///  LABEL  ATTR1  ATTR2  ATTR3  ATTR4  ATTR5
///  1      0      0.1    0.2    0      0
///  2      0      0.1    0.3   -1.2    0
///  1      0.4    0      0      0      0
/// ```
/// with bias `1` is stored as `l = 3`, `n = 6`, `y = [1, 2, 1]` and
/// ```text
///  x[0] = (2,0.1) (3,0.2) (6,1)
///  x[1] = (2,0.1) (3,0.3) (4,-1.2) (6,1)
///  x[2] = (1,0.4) (6,1)
/// ```
#[derive(Clone, Debug)]
pub struct Dataset {
    l: usize,
    n: usize,
    y: Vec<f64>,
    x: Vec<Vec<Feature>>,
    bias: f64,
}

fn invalid(row: usize, position: usize, reason: String) -> Error {
    Error::InvalidFeature {
        row,
        position,
        reason,
    }
}

impl Dataset {
    /// Creates a [`Dataset`] from rows that already carry the bias feature (if `bias >= 0`).
    ///
    /// * `x`: sparse rows with strictly increasing 1-based indices
    /// * `y`: targets, one per row
    /// * `n`: number of features including the bias column
    /// * `bias`: value of the bias feature, negative to disable it
    pub fn new(x: Vec<Vec<Feature>>, y: Vec<f64>, n: usize, bias: f64) -> Result<Self> {
        check_len("y", x.len(), y.len())?;
        for (row, xi) in x.iter().enumerate() {
            let mut last = 0;
            for (position, feature) in xi.iter().enumerate() {
                let index = feature.index();
                if index == 0 {
                    return Err(invalid(row, position, "index must be >= 1".to_string()));
                }
                if index <= last {
                    return Err(invalid(
                        row,
                        position,
                        format!("index {index} does not follow {last}"),
                    ));
                }
                if index > n {
                    return Err(invalid(
                        row,
                        position,
                        format!("index {index} exceeds feature count {n}"),
                    ));
                }
                last = index;
            }
            if bias >= 0.0 {
                match xi.last() {
                    Some(f) if f.index() == n && f.value() == bias => {}
                    _ => {
                        return Err(invalid(
                            row,
                            xi.len().saturating_sub(1),
                            format!("row does not end with bias feature ({n},{bias})"),
                        ))
                    }
                }
            }
        }
        Ok(Dataset {
            l: y.len(),
            n,
            y,
            x,
            bias,
        })
    }

    /// Creates a [`Dataset`] from raw rows, appending the bias feature `(n_features + 1, bias)`
    /// to every row if `bias >= 0`.
    pub fn with_bias(
        mut x: Vec<Vec<Feature>>,
        y: Vec<f64>,
        n_features: usize,
        bias: f64,
    ) -> Result<Self> {
        if bias >= 0.0 {
            let n = n_features + 1;
            for xi in x.iter_mut() {
                xi.push(Feature::new(n, bias));
            }
            Self::new(x, y, n, bias)
        } else {
            Self::new(x, y, n_features, bias)
        }
    }

    /// Returns the number of instances.
    pub fn l(&self) -> usize {
        self.l
    }

    /// Returns the number of features (including the bias column).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the targets.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the sparse rows.
    pub fn x(&self) -> &[Vec<Feature>] {
        &self.x
    }

    /// Returns the target of the ith instance.
    pub fn label(&self, i: usize) -> f64 {
        self.y[i]
    }

    /// Returns the bias value (negative if there is no bias feature).
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Checks whether the rows carry a bias feature.
    pub fn has_bias(&self) -> bool {
        self.bias >= 0.0
    }

    /// Returns the total number of stored records.
    pub fn nnz(&self) -> usize {
        self.x.iter().map(|xi| xi.len()).sum()
    }

    /// Builds equal cost weights for all instances.
    pub fn uniform_costs(&self, c: f64) -> Vec<f64> {
        vec![c; self.l]
    }

    /// Builds cost weights depending on the sign of the label.
    pub fn class_costs(&self, c_pos: f64, c_neg: f64) -> Vec<f64> {
        self.y
            .iter()
            .map(|&yi| if yi > 0.0 { c_pos } else { c_neg })
            .collect()
    }

    /// Copies the feature matrix into a dense `l x n` array.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.l, self.n));
        for (i, xi) in self.x.iter().enumerate() {
            for feature in xi {
                dense[(i, feature.offset())] = feature.value();
            }
        }
        dense
    }
}
