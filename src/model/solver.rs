//! Solver identities
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Training methods, identified by stable numeric ids
pub enum SolverType {
    /// L2-regularized logistic regression (primal)
    L2rLr,
    /// L2-regularized L2-loss support vector classification (dual)
    L2rL2lossSvcDual,
    /// L2-regularized L2-loss support vector classification (primal)
    L2rL2lossSvc,
    /// L2-regularized L1-loss support vector classification (dual)
    L2rL1lossSvcDual,
    /// Multi-class support vector classification by Crammer and Singer
    McsvmCs,
    /// L1-regularized L2-loss support vector classification
    L1rL2lossSvc,
    /// L1-regularized logistic regression
    L1rLr,
    /// L2-regularized logistic regression (dual)
    L2rLrDual,
    /// L2-regularized L2-loss support vector regression (primal)
    L2rL2lossSvr,
    /// L2-regularized L2-loss support vector regression (dual)
    L2rL2lossSvrDual,
    /// L2-regularized L1-loss support vector regression (dual)
    L2rL1lossSvrDual,
}

impl SolverType {
    /// All solver types in id order
    pub const ALL: [SolverType; 11] = [
        SolverType::L2rLr,
        SolverType::L2rL2lossSvcDual,
        SolverType::L2rL2lossSvc,
        SolverType::L2rL1lossSvcDual,
        SolverType::McsvmCs,
        SolverType::L1rL2lossSvc,
        SolverType::L1rLr,
        SolverType::L2rLrDual,
        SolverType::L2rL2lossSvr,
        SolverType::L2rL2lossSvrDual,
        SolverType::L2rL1lossSvrDual,
    ];

    /// Returns the numeric id.
    pub fn id(&self) -> i32 {
        match self {
            SolverType::L2rLr => 0,
            SolverType::L2rL2lossSvcDual => 1,
            SolverType::L2rL2lossSvc => 2,
            SolverType::L2rL1lossSvcDual => 3,
            SolverType::McsvmCs => 4,
            SolverType::L1rL2lossSvc => 5,
            SolverType::L1rLr => 6,
            SolverType::L2rLrDual => 7,
            SolverType::L2rL2lossSvr => 11,
            SolverType::L2rL2lossSvrDual => 12,
            SolverType::L2rL1lossSvrDual => 13,
        }
    }

    /// Looks up the solver type with the given id.
    pub fn from_id(id: i32) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|solver| solver.id() == id)
            .ok_or(Error::UnknownSolver(id))
    }

    /// Checks whether the solver trains a logistic regression model.
    pub fn is_logistic_regression(&self) -> bool {
        matches!(
            self,
            SolverType::L2rLr | SolverType::L1rLr | SolverType::L2rLrDual
        )
    }

    /// Checks whether the solver trains a regression model.
    pub fn is_support_vector_regression(&self) -> bool {
        matches!(
            self,
            SolverType::L2rL2lossSvr | SolverType::L2rL2lossSvrDual | SolverType::L2rL1lossSvrDual
        )
    }
}
