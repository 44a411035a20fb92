//! Sparse matrix-vector products
pub mod active;
pub use active::ActiveSet;

use crate::data::{Dataset, Feature};

/// Row-sparse feature matrix with products against dense vectors.
///
/// All products address dense buffers at [`Feature::offset`].
pub trait DesignMatrix {
    /// Returns the number of rows (instances).
    fn rows(&self) -> usize;
    /// Returns the number of columns (features).
    fn cols(&self) -> usize;
    /// Returns the sparse records of the ith row.
    fn row(&self, i: usize) -> &[Feature];

    /// Computes the inner product of the ith row with `v`.
    #[inline]
    fn row_dot(&self, i: usize, v: &[f64]) -> f64 {
        let mut acc = 0.0;
        for feature in self.row(i) {
            acc += v[feature.offset()] * feature.value();
        }
        acc
    }

    /// Computes `out = X v`.
    fn x_v(&self, v: &[f64], out: &mut [f64]) {
        for (i, out_i) in out[..self.rows()].iter_mut().enumerate() {
            *out_i = self.row_dot(i, v);
        }
    }

    /// Computes `out = X^T v`.
    fn xt_v(&self, v: &[f64], out: &mut [f64]) {
        out[..self.cols()].fill(0.0);
        for i in 0..self.rows() {
            let vi = v[i];
            for feature in self.row(i) {
                out[feature.offset()] += vi * feature.value();
            }
        }
    }

    /// Computes `out[k] = x_{I[k]} v` for the active instances `I`.
    fn sub_x_v(&self, active: &ActiveSet, v: &[f64], out: &mut [f64]) {
        for (k, &i) in active.indices().iter().enumerate() {
            out[k] = self.row_dot(i, v);
        }
    }

    /// Computes `out = sum_k v[k] x_{I[k]}` for the active instances `I`.
    fn sub_xt_v(&self, active: &ActiveSet, v: &[f64], out: &mut [f64]) {
        out[..self.cols()].fill(0.0);
        for (k, &i) in active.indices().iter().enumerate() {
            let vk = v[k];
            for feature in self.row(i) {
                out[feature.offset()] += vk * feature.value();
            }
        }
    }
}

impl DesignMatrix for Dataset {
    fn rows(&self) -> usize {
        self.l()
    }

    fn cols(&self) -> usize {
        self.n()
    }

    #[inline]
    fn row(&self, i: usize) -> &[Feature] {
        &self.x()[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dataset() -> Dataset {
        let x = vec![
            vec![Feature::new(1, 2.0), Feature::new(3, -1.0)],
            vec![Feature::new(2, 0.5)],
            vec![],
            vec![Feature::new(1, 1.0), Feature::new(2, 1.0), Feature::new(3, 1.0)],
        ];
        Dataset::new(x, vec![1.0, -1.0, 1.0, -1.0], 3, -1.0).unwrap()
    }

    #[test]
    fn forward_product_matches_dense() {
        let data = dataset();
        let v = [1.0, -2.0, 3.0];
        let mut out = vec![f64::NAN; 4];
        data.x_v(&v, &mut out);
        assert_eq!(out, vec![-1.0, -1.0, 0.0, 2.0]);

        let dense = data.to_dense();
        let expected = dense.dot(&ndarray::arr1(&v));
        for (a, b) in out.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *b);
        }
    }

    #[test]
    fn transpose_product_uses_zero_based_offsets() {
        let data = dataset();
        let v = [1.0, 2.0, 3.0, 4.0];
        let mut out = vec![f64::NAN; 3];
        data.xt_v(&v, &mut out);
        assert_eq!(out, vec![6.0, 5.0, 3.0]);

        let dense = data.to_dense();
        let expected = dense.t().dot(&ndarray::arr1(&v));
        for (a, b) in out.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *b);
        }
    }

    #[test]
    #[should_panic]
    fn forward_product_rejects_short_output() {
        let data = dataset();
        let mut out = vec![0.0; 1];
        data.x_v(&[1.0, -2.0, 3.0], &mut out);
    }

    #[test]
    fn restricted_products_skip_inactive_rows() {
        let data = dataset();
        let mut active = ActiveSet::new(4);
        active.push(1);
        active.push(3);

        let mut xv = vec![0.0; 2];
        data.sub_x_v(&active, &[1.0, -2.0, 3.0], &mut xv);
        assert_eq!(xv, vec![-1.0, 2.0]);

        let mut xtv = vec![f64::NAN; 3];
        data.sub_xt_v(&active, &[2.0, 4.0], &mut xtv);
        assert_eq!(xtv, vec![4.0, 5.0, 4.0]);
    }

    #[test]
    fn restricted_transpose_over_all_rows_is_identical() {
        let data = dataset();
        let v = [0.1, -0.7, 1e-3, 3.3];
        let mut active = ActiveSet::new(4);
        active.fill();

        let mut full = vec![0.0; 3];
        let mut sub = vec![0.0; 3];
        data.xt_v(&v, &mut full);
        data.sub_xt_v(&active, &v, &mut sub);
        for (a, b) in full.iter().zip(sub.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
