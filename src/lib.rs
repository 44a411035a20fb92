//! Objective functions for training L2-regularized linear models on sparse data.
#![warn(missing_docs)]

pub mod data;
mod error;
pub mod function;
pub mod model;
pub mod sparse;

pub use crate::data::{Dataset, Feature};
pub use crate::error::{Error, Result};
pub use crate::function::{Function, L2rL2SvcFunction, L2rL2SvrFunction, L2rLrFunction};
pub use crate::model::{Model, SolverType};
