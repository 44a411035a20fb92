//! L2-regularized squared-loss functions restricted to an active set
use super::state::StateGuard;
use super::{regularization, CacheState, Function, Params};
use crate::data::Dataset;
use crate::error::{check_len, Result};
use crate::sparse::{ActiveSet, DesignMatrix};
use log::{debug, trace, warn};

/// Per-instance rule deciding whether an instance is active and what it contributes.
pub trait ActivityRule {
    /// Returns the residual `r_i` (before cost weighting) if the instance with target `yi` and
    /// score `zi` is active, `None` otherwise.
    ///
    /// The loss of an active instance is `r_i^2`, its gradient contribution `2 r_i x_i`.
    fn residual(&self, yi: f64, zi: f64) -> Option<f64>;

    /// Computes the loss (before cost weighting) of an instance.
    fn loss(&self, yi: f64, zi: f64) -> f64 {
        match self.residual(yi, zi) {
            Some(r) => r * r,
            None => 0.0,
        }
    }
}

/// Objective `0.5 * w'w + sum_i C_i * r_i(w'x_i)^2` where only active instances have `r_i != 0`
///
/// Gradient and Hessian-vector products only visit the instances that were
/// active at the last call of `gradient`. The Hessian is the generalized one,
/// `I + 2 X_I' diag(C_I) X_I`, with the active set `I` frozen until the next gradient.
pub struct L2rL2LossFunction<'a, R> {
    data: &'a Dataset,
    c: &'a [f64],
    rule: R,
    // scores after `evaluate`, compacted weighted residuals after `gradient`
    z: Vec<f64>,
    active: ActiveSet,
    wa: Vec<f64>,
    guard: StateGuard,
}

impl<'a, R> L2rL2LossFunction<'a, R>
where
    R: ActivityRule,
{
    /// Creates a [`L2rL2LossFunction`] for the given activity rule.
    pub fn with_rule(data: &'a Dataset, c: &'a [f64], rule: R, params: &Params) -> Result<Self> {
        let l = data.l();
        check_len("C", l, c.len())?;
        Ok(L2rL2LossFunction {
            data,
            c,
            rule,
            z: vec![0.0; l],
            active: ActiveSet::new(l),
            wa: vec![0.0; l],
            guard: StateGuard::new(params.verify_weights),
        })
    }

    /// Returns the activity rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Returns the active set of the last gradient computation.
    pub fn active(&self) -> &ActiveSet {
        &self.active
    }

    /// Returns the number of active instances.
    pub fn active_size(&self) -> usize {
        self.active.len()
    }
}

impl<R> Function for L2rL2LossFunction<'_, R>
where
    R: ActivityRule,
{
    fn nr_variable(&self) -> usize {
        self.data.n()
    }

    fn evaluate(&mut self, w: &[f64]) -> Result<f64> {
        check_len("w", self.nr_variable(), w.len())?;
        let y = self.data.y();

        self.data.x_v(w, &mut self.z);

        let mut f = regularization(w);
        for (i, &zi) in self.z.iter().enumerate() {
            f += self.c[i] * self.rule.loss(y[i], zi);
        }
        self.guard.scores_ready(w);

        if !f.is_finite() {
            warn!("objective is not finite: {f}");
        }
        debug!("objective {f:.6e}");
        Ok(f)
    }

    fn gradient(&mut self, w: &[f64], g: &mut [f64]) -> Result<()> {
        let w_size = self.nr_variable();
        check_len("w", w_size, w.len())?;
        check_len("g", w_size, g.len())?;
        let fp = self.guard.check_gradient(w)?;
        let y = self.data.y();

        // residuals are written to the front of z, never ahead of the read position
        self.active.clear();
        for i in 0..self.data.l() {
            if let Some(r) = self.rule.residual(y[i], self.z[i]) {
                self.z[self.active.len()] = self.c[i] * r;
                self.active.push(i);
            }
        }
        self.data.sub_xt_v(&self.active, &self.z, g);

        for (gj, &wj) in g.iter_mut().zip(w) {
            *gj = wj + 2.0 * *gj;
        }
        self.guard.gradient_ready(fp);
        debug!(
            "active set size {} / {}",
            self.active.len(),
            self.active.capacity()
        );
        Ok(())
    }

    fn hessian_vector_product(&mut self, s: &[f64], hs: &mut [f64]) -> Result<()> {
        let w_size = self.nr_variable();
        check_len("s", w_size, s.len())?;
        check_len("hs", w_size, hs.len())?;
        self.guard.check_hessian()?;

        let size = self.active.len();
        self.data.sub_x_v(&self.active, s, &mut self.wa[..size]);
        for (wak, &i) in self.wa[..size].iter_mut().zip(self.active.indices()) {
            *wak *= self.c[i];
        }
        self.data.sub_xt_v(&self.active, &self.wa, hs);

        for (hsj, &sj) in hs.iter_mut().zip(s) {
            *hsj = sj + 2.0 * *hsj;
        }
        trace!("Hessian-vector product over {size} active instances");
        Ok(())
    }

    fn state(&self) -> CacheState {
        self.guard.state()
    }
}
