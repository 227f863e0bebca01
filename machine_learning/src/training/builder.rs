use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use super::{ModelTrainer, Trainer};
use crate::{
    MlErr, Result,
    arch::{LogisticRegression, Model, loss::NegLogLikelihood},
    dataset::Dataset,
    initialization::{ConstParamGen, ParamGen, RandParamGen},
    optimization::{GradientDescent, Optimizer},
    specs::{InitSpec, LossFnSpec, OptimizerSpec, TrainerSpec},
};

/// Builds `Trainer`s given a specification.
#[derive(Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Trainer` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The specification for the trainer.
    ///
    /// # Returns
    /// The trainer or an error if `spec` is inconsistent.
    pub fn build(&self, spec: &TrainerSpec) -> Result<Box<dyn Trainer>> {
        let dataset = Dataset::new(spec.dataset.data.clone(), spec.dataset.x_size)?;
        debug!(
            "built dataset with {} examples of {} features",
            dataset.len(),
            dataset.x_size()
        );

        self.resolve_model(spec, dataset)
    }

    fn resolve_model(&self, spec: &TrainerSpec, dataset: Dataset) -> Result<Box<dyn Trainer>> {
        let loss_fn = match spec.loss {
            LossFnSpec::NegLogLikelihood { clamp: None } => NegLogLikelihood::new(),
            LossFnSpec::NegLogLikelihood { clamp: Some(eps) } => NegLogLikelihood::clamped(eps)?,
        };

        let model = LogisticRegression::new(dataset.x_size(), loss_fn);
        self.resolve_optimizer(spec, dataset, model)
    }

    fn resolve_optimizer<M>(
        &self,
        spec: &TrainerSpec,
        dataset: Dataset,
        model: M,
    ) -> Result<Box<dyn Trainer>>
    where
        M: Model + 'static,
    {
        match spec.optimizer {
            OptimizerSpec::GradientDescent { learning_rate } => {
                let optimizer = GradientDescent::new(learning_rate)?;
                self.terminate_build(spec, dataset, model, optimizer)
            }
        }
    }

    fn terminate_build<M, O>(
        &self,
        spec: &TrainerSpec,
        dataset: Dataset,
        model: M,
        optimizer: O,
    ) -> Result<Box<dyn Trainer>>
    where
        M: Model + 'static,
        O: Optimizer + 'static,
    {
        let params = self.resolve_init(spec, model.size())?;
        let trainer = ModelTrainer::new(
            model,
            optimizer,
            dataset,
            params,
            spec.max_iterations,
            spec.epsilon,
        )?
        .with_log_every(spec.log_every.unwrap_or_default());

        Ok(Box::new(trainer))
    }

    /// Generates the initial params for a model of `size` parameters.
    pub fn resolve_init(&self, spec: &TrainerSpec, size: usize) -> Result<Vec<f64>> {
        match &spec.init {
            InitSpec::Uniform { low, high } => {
                let rng = self.generate_rng(spec.seed);
                RandParamGen::uniform(rng, size, *low, *high)?.generate(size)
            }
            InitSpec::Const { value } => ConstParamGen::new(*value, size).generate(size),
            InitSpec::Fixed { values } if values.len() == size => Ok(values.clone()),
            InitSpec::Fixed { values } => Err(MlErr::SizeMismatch {
                what: "initial params",
                got: values.len(),
                expected: size,
            }),
        }
    }

    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
