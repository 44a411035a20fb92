//! Sparse training data
pub mod dataset;
pub mod feature;

pub use dataset::Dataset;
pub use feature::Feature;
