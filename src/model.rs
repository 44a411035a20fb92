//! Trained linear models
pub mod solver;
pub use solver::SolverType;

use crate::data::Feature;
use crate::error::{check_len, Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "ModelData")]
/// Weights obtained from training together with the information needed to apply them
pub struct Model {
    solver_type: SolverType,
    nr_class: usize,
    labels: Vec<i32>,
    nr_feature: usize,
    bias: f64,
    w: Vec<f64>,
}

impl Model {
    /// Creates a [`Model`] and checks the length of the weight array.
    ///
    /// The weights are stored feature-major: the `k`th weight of feature `j`
    /// (0-based) is `w[j * columns + k]`, where `columns` is `1` for
    /// regression and two-class models and `nr_class` otherwise. If
    /// `bias >= 0`, the bias weights follow the `nr_feature` feature weights.
    pub fn new(
        solver_type: SolverType,
        nr_class: usize,
        labels: Vec<i32>,
        nr_feature: usize,
        bias: f64,
        w: Vec<f64>,
    ) -> Result<Self> {
        if !solver_type.is_support_vector_regression() {
            check_len("labels", nr_class, labels.len())?;
        }
        let model = Model {
            solver_type,
            nr_class,
            labels,
            nr_feature,
            bias,
            w,
        };
        let n = nr_feature + usize::from(model.has_bias());
        check_len("w", n * model.weight_columns(), model.w.len())?;
        Ok(model)
    }

    /// Returns the solver type used in training.
    pub fn solver_type(&self) -> SolverType {
        self.solver_type
    }

    /// Returns the number of classes.
    pub fn nr_class(&self) -> usize {
        self.nr_class
    }

    /// Returns the class labels.
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Returns the number of features (without bias).
    pub fn nr_feature(&self) -> usize {
        self.nr_feature
    }

    /// Returns the bias value (negative if no bias feature was used).
    pub fn bias(&self) -> f64 {
        self.bias
    }

    fn has_bias(&self) -> bool {
        self.bias >= 0.0
    }

    /// Returns the feature weights.
    pub fn feature_weights(&self) -> &[f64] {
        &self.w
    }

    /// Checks whether the model yields probability estimates.
    pub fn is_probability_model(&self) -> bool {
        self.solver_type.is_logistic_regression()
    }

    /// Returns the number of weights stored per feature.
    pub fn weight_columns(&self) -> usize {
        if self.solver_type.is_support_vector_regression()
            || (self.nr_class == 2 && self.solver_type != SolverType::McsvmCs)
        {
            1
        } else {
            self.nr_class
        }
    }

    /// Evaluates the decision functions for a sparse sample.
    ///
    /// Features with index above [`Model::nr_feature`] (including a bias
    /// feature already present in `row`) are ignored; the bias term is added
    /// from the model.
    pub fn decision_values(&self, row: &[Feature]) -> Vec<f64> {
        let columns = self.weight_columns();
        let mut dec = vec![0.0; columns];
        for feature in row {
            if feature.index() == 0 || feature.index() > self.nr_feature {
                continue;
            }
            let base = feature.offset() * columns;
            for (k, dk) in dec.iter_mut().enumerate() {
                *dk += self.w[base + k] * feature.value();
            }
        }
        if self.has_bias() {
            let base = self.nr_feature * columns;
            for (k, dk) in dec.iter_mut().enumerate() {
                *dk += self.w[base + k] * self.bias;
            }
        }
        dec
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.solver_type == other.solver_type
            && self.nr_class == other.nr_class
            && self.labels == other.labels
            && self.nr_feature == other.nr_feature
            && self.bias.to_bits() == other.bias.to_bits()
            && self.w == other.w
    }
}

// deserialized models go through `Model::new`
#[derive(Deserialize)]
struct ModelData {
    solver_type: SolverType,
    nr_class: usize,
    labels: Vec<i32>,
    nr_feature: usize,
    bias: f64,
    w: Vec<f64>,
}

impl TryFrom<ModelData> for Model {
    type Error = Error;

    fn try_from(data: ModelData) -> Result<Self> {
        Model::new(
            data.solver_type,
            data.nr_class,
            data.labels,
            data.nr_feature,
            data.bias,
            data.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_weight_length() {
        let model = Model::new(SolverType::L2rL2lossSvc, 2, vec![1, -1], 3, 1.0, vec![0.0; 4]);
        assert!(model.is_ok());
        let model = Model::new(SolverType::L2rL2lossSvc, 2, vec![1, -1], 3, -1.0, vec![0.0; 4]);
        assert!(matches!(
            model,
            Err(Error::DimensionMismatch { what: "w", expected: 3, actual: 4 })
        ));
        let model = Model::new(SolverType::L2rLr, 3, vec![1, 2, 3], 2, -1.0, vec![0.0; 6]);
        assert_eq!(model.unwrap().weight_columns(), 3);
    }

    #[test]
    fn regression_needs_no_labels() {
        let model = Model::new(SolverType::L2rL2lossSvr, 2, vec![], 2, -1.0, vec![1.0, 2.0]).unwrap();
        assert_eq!(model.weight_columns(), 1);
        assert!(!model.is_probability_model());
    }

    #[test]
    fn decision_value_adds_bias_once() {
        let model = Model::new(SolverType::L2rLr, 2, vec![1, -1], 2, 2.0, vec![1.0, -1.0, 0.5]).unwrap();
        assert!(model.is_probability_model());
        let plain = [Feature::new(1, 3.0), Feature::new(2, 1.0)];
        assert_eq!(model.decision_values(&plain), vec![3.0]);
        let with_bias = [Feature::new(1, 3.0), Feature::new(2, 1.0), Feature::new(3, 2.0)];
        assert_eq!(model.decision_values(&with_bias), vec![3.0]);
    }

    #[test]
    fn multi_class_layout_is_feature_major() {
        let w = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let model = Model::new(SolverType::McsvmCs, 2, vec![0, 1], 3, -1.0, w).unwrap();
        assert_eq!(model.weight_columns(), 2);
        assert_eq!(model.decision_values(&[Feature::new(2, 1.0)]), vec![3.0, 4.0]);
    }

    #[test]
    fn signed_zero_weights_compare_equal() {
        let a = Model::new(SolverType::L2rLr, 2, vec![1, -1], 1, -1.0, vec![0.0]).unwrap();
        let b = Model::new(SolverType::L2rLr, 2, vec![1, -1], 1, -1.0, vec![-0.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn nan_bias_compares_by_bits() {
        let a = Model::new(SolverType::L2rLr, 2, vec![1, -1], 1, f64::NAN, vec![0.5]).unwrap();
        assert_eq!(a, a.clone());
        let b = Model::new(SolverType::L2rLr, 2, vec![1, -1], 1, -1.0, vec![0.5]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn deserialization_checks_weight_length() {
        let model = Model::new(SolverType::L2rLr, 2, vec![1, -1], 3, -1.0, vec![1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(serde_json::from_str::<Model>(&json).unwrap(), model);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["w"] = serde_json::json!([1.0]);
        let err = serde_json::from_value::<Model>(value).unwrap_err();
        assert!(err.to_string().contains("w has length 1, expected 3"));
    }
}
