use serde::{Deserialize, Serialize};

/// The specification for the `Optimizer` trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerSpec {
    GradientDescent { learning_rate: f64 },
}

impl Default for OptimizerSpec {
    fn default() -> Self {
        Self::GradientDescent { learning_rate: 1.0 }
    }
}

/// The specification for the `LossFn` trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossFnSpec {
    NegLogLikelihood {
        #[serde(default)]
        clamp: Option<f64>,
    },
}

impl Default for LossFnSpec {
    fn default() -> Self {
        Self::NegLogLikelihood { clamp: None }
    }
}

/// The specification for the initial parameters of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitSpec {
    /// Independent samples of `U[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Every parameter set to `value`.
    Const { value: f64 },
    /// Exactly these parameters, one per feature.
    Fixed { values: Vec<f64> },
}

impl Default for InitSpec {
    fn default() -> Self {
        Self::Uniform { low: 0.0, high: 1.0 }
    }
}

/// The specification for the `Dataset`.
///
/// `data` is row-major, each row being `x_size` features followed by the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatasetSpec {
    pub data: Vec<f64>,
    pub x_size: usize,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        #[rustfmt::skip]
        let data = vec![
            1.0, 0.6,  1.0,
            1.0, 0.2,  0.0,
            1.0, 1.0,  1.0,
            1.0, 0.0,  0.0,
            1.0, 0.8,  1.0,
            1.0, 0.49, 0.0,
            1.0, 0.51, 1.0,
        ];

        Self { data, x_size: 2 }
    }
}

/// The specification for a full training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerSpec {
    pub dataset: DatasetSpec,
    pub optimizer: OptimizerSpec,
    pub loss: LossFnSpec,
    pub init: InitSpec,
    pub max_iterations: usize,
    pub epsilon: f64,
    pub seed: Option<u64>,
    pub log_every: Option<usize>,
}

impl Default for TrainerSpec {
    fn default() -> Self {
        Self {
            dataset: DatasetSpec::default(),
            optimizer: OptimizerSpec::default(),
            loss: LossFnSpec::default(),
            init: InitSpec::default(),
            max_iterations: 1_000_000,
            epsilon: 1e-3,
            seed: None,
            log_every: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dataset_has_seven_examples() {
        let spec = DatasetSpec::default();
        assert_eq!(spec.data.len(), 7 * (spec.x_size + 1));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{
            "optimizer": { "gradient_descent": { "learning_rate": 0.5 } },
            "init": { "fixed": { "values": [0.5, 0.5] } },
            "seed": 7
        }"#;

        let spec: TrainerSpec = serde_json::from_str(json).unwrap();

        assert_eq!(
            spec.optimizer,
            OptimizerSpec::GradientDescent { learning_rate: 0.5 }
        );
        assert_eq!(
            spec.init,
            InitSpec::Fixed {
                values: vec![0.5, 0.5]
            }
        );
        assert_eq!(spec.seed, Some(7));
        assert_eq!(spec.max_iterations, 1_000_000);
        assert_eq!(spec.epsilon, 1e-3);
        assert_eq!(spec.dataset, DatasetSpec::default());
    }

    #[test]
    fn loss_clamp_is_optional() {
        let spec: LossFnSpec = serde_json::from_str(r#"{ "neg_log_likelihood": {} }"#).unwrap();
        assert_eq!(spec, LossFnSpec::NegLogLikelihood { clamp: None });
    }
}
