//! L2-regularized logistic regression
use super::state::StateGuard;
use super::{regularization, CacheState, Function, Params};
use crate::data::Dataset;
use crate::error::{check_len, Result};
use crate::sparse::DesignMatrix;
use log::{debug, trace, warn};

/// Objective `0.5 * w'w + sum_i C_i * log(1 + exp(-y_i w'x_i))`
pub struct L2rLrFunction<'a> {
    data: &'a Dataset,
    c: &'a [f64],
    // scores after `evaluate`, gradient coefficients after `gradient`
    z: Vec<f64>,
    // variance terms p_i (1 - p_i)
    d: Vec<f64>,
    wa: Vec<f64>,
    guard: StateGuard,
}

impl<'a> L2rLrFunction<'a> {
    /// Creates a [`L2rLrFunction`] with default parameters.
    ///
    /// * `data`: training data with labels `+1`/`-1`
    /// * `c`: cost weight of each instance
    pub fn new(data: &'a Dataset, c: &'a [f64]) -> Result<Self> {
        Self::with_params(data, c, &Params::new())
    }

    /// Creates a [`L2rLrFunction`] with the given parameters.
    pub fn with_params(data: &'a Dataset, c: &'a [f64], params: &Params) -> Result<Self> {
        let l = data.l();
        check_len("C", l, c.len())?;
        Ok(L2rLrFunction {
            data,
            c,
            z: vec![0.0; l],
            d: vec![0.0; l],
            wa: vec![0.0; l],
            guard: StateGuard::new(params.verify_weights),
        })
    }
}

impl Function for L2rLrFunction<'_> {
    fn nr_variable(&self) -> usize {
        self.data.n()
    }

    fn evaluate(&mut self, w: &[f64]) -> Result<f64> {
        check_len("w", self.nr_variable(), w.len())?;
        let y = self.data.y();

        self.data.x_v(w, &mut self.z);

        let mut f = regularization(w);
        for (i, &zi) in self.z.iter().enumerate() {
            let yz = y[i] * zi;
            if yz >= 0.0 {
                f += self.c[i] * (-yz).exp().ln_1p();
            } else {
                f += self.c[i] * (-yz + yz.exp().ln_1p());
            }
        }
        self.guard.scores_ready(w);

        if !f.is_finite() {
            warn!("logistic objective is not finite: {f}");
        }
        debug!("logistic objective {f:.6e}");
        Ok(f)
    }

    fn gradient(&mut self, w: &[f64], g: &mut [f64]) -> Result<()> {
        let w_size = self.nr_variable();
        check_len("w", w_size, w.len())?;
        check_len("g", w_size, g.len())?;
        let fp = self.guard.check_gradient(w)?;
        let y = self.data.y();

        for i in 0..self.data.l() {
            let p = 1.0 / (1.0 + (-y[i] * self.z[i]).exp());
            self.d[i] = p * (1.0 - p);
            self.z[i] = self.c[i] * (p - 1.0) * y[i];
        }
        self.data.xt_v(&self.z, g);

        for (gj, &wj) in g.iter_mut().zip(w) {
            *gj += wj;
        }
        self.guard.gradient_ready(fp);
        Ok(())
    }

    fn hessian_vector_product(&mut self, s: &[f64], hs: &mut [f64]) -> Result<()> {
        let w_size = self.nr_variable();
        check_len("s", w_size, s.len())?;
        check_len("hs", w_size, hs.len())?;
        self.guard.check_hessian()?;

        self.data.x_v(s, &mut self.wa);
        for (i, wai) in self.wa.iter_mut().enumerate() {
            *wai *= self.c[i] * self.d[i];
        }
        self.data.xt_v(&self.wa, hs);

        for (hsj, &sj) in hs.iter_mut().zip(s) {
            *hsj += sj;
        }
        trace!("logistic Hessian-vector product over {} instances", self.data.l());
        Ok(())
    }

    fn state(&self) -> CacheState {
        self.guard.state()
    }
}
