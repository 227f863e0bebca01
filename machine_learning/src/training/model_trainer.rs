use std::num::NonZeroUsize;

use log::{debug, info, warn};
use ndarray::{Array1, ArrayView1};

use super::{TrainReport, TrainState, Trainer};
use crate::{MlErr, Result, arch::Model, dataset::Dataset, optimization::Optimizer};

/// A model `Trainer`. Owns the parameters being trained and runs full-batch training over its
/// dataset until the loss drops to `epsilon` or `max_iterations` is reached.
pub struct ModelTrainer<M, O>
where
    M: Model,
    O: Optimizer,
{
    model: M,
    optimizer: O,
    dataset: Dataset,
    params: Array1<f64>,

    max_iterations: NonZeroUsize,
    epsilon: f64,
    log_every: Option<NonZeroUsize>,
    state: TrainState,
}

impl<M, O> ModelTrainer<M, O>
where
    M: Model,
    O: Optimizer,
{
    /// Returns a new `ModelTrainer`.
    ///
    /// # Arguments
    /// * `model` - The model that will be trained.
    /// * `optimizer` - The optimizer that dictates how to update the params on each iteration.
    /// * `dataset` - The dataset the model will be trained with.
    /// * `params` - The initial params, one per model parameter.
    /// * `max_iterations` - The hard cap on the amount of iterations.
    /// * `epsilon` - The convergence threshold for the batch loss.
    ///
    /// # Returns
    /// An error if the sizes of the model, dataset and params don't agree or if a
    /// hyperparameter is out of range.
    pub fn new(
        model: M,
        optimizer: O,
        dataset: Dataset,
        params: Vec<f64>,
        max_iterations: usize,
        epsilon: f64,
    ) -> Result<Self> {
        let size = model.size();

        if dataset.x_size() != size {
            return Err(MlErr::SizeMismatch {
                what: "dataset features",
                got: dataset.x_size(),
                expected: size,
            });
        }

        if params.len() != size {
            return Err(MlErr::SizeMismatch {
                what: "initial params",
                got: params.len(),
                expected: size,
            });
        }

        let max_iterations =
            NonZeroUsize::new(max_iterations).ok_or(MlErr::InvalidHyperparameter {
                name: "max_iterations",
                value: 0.,
            })?;

        if !(epsilon.is_finite() && epsilon > 0.) {
            return Err(MlErr::InvalidHyperparameter {
                name: "epsilon",
                value: epsilon,
            });
        }

        Ok(Self {
            model,
            optimizer,
            dataset,
            params: Array1::from(params),
            max_iterations,
            epsilon,
            log_every: None,
            state: TrainState::Running,
        })
    }

    /// Logs the iteration and batch loss at debug level every `every` iterations, `0` disables it.
    pub fn with_log_every(mut self, every: usize) -> Self {
        self.log_every = NonZeroUsize::new(every);
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// A view of the current params.
    pub fn params(&self) -> ArrayView1<'_, f64> {
        self.params.view()
    }

    /// Computes the batch loss at the current params.
    pub fn loss(&self) -> f64 {
        self.model.batch_loss(self.params.view(), &self.dataset).0
    }

    /// Performs a single iteration: computes the batch loss and gradient, checks for
    /// convergence and, if not converged, updates the params in place.
    ///
    /// # Arguments
    /// * `iteration` - The iteration counter, reported when converging.
    ///
    /// # Returns
    /// The batch loss observed *before* the update and the resulting state.
    pub fn step(&mut self, iteration: usize) -> (f64, TrainState) {
        let (loss, grad) = self.model.batch_loss(self.params.view(), &self.dataset);

        if loss <= self.epsilon {
            self.state = TrainState::Converged { iteration };
            return (loss, self.state);
        }

        self.optimizer
            .update_params(self.params.view_mut(), grad.view());

        (loss, self.state)
    }

    /// Runs the training loop from the current params until a terminal state is reached.
    ///
    /// Calling it again after it finished resumes training from the last params.
    ///
    /// # Returns
    /// A report with the terminal state, the loss at the start and the end of the run, the
    /// training accuracy and the resulting params.
    pub fn train(&mut self) -> TrainReport {
        let max_iterations = self.max_iterations.get();
        let mut initial_loss = f64::NAN;
        let mut warned_non_finite = false;

        self.state = TrainState::Running;
        info!(
            "training {} params over {} examples, max_iterations={max_iterations}, epsilon={}",
            self.model.size(),
            self.dataset.len(),
            self.epsilon
        );

        for iteration in 0..max_iterations {
            let (loss, state) = self.step(iteration);

            if iteration == 0 {
                initial_loss = loss;
            }

            if !loss.is_finite() && !warned_non_finite {
                warn!("non-finite batch loss {loss} at iteration {iteration}");
                warned_non_finite = true;
            }

            if let Some(every) = self.log_every {
                if iteration % every.get() == 0 {
                    debug!("iteration {iteration}: loss {loss}");
                }
            }

            if state.is_terminal() {
                break;
            }
        }

        let iterations = match self.state {
            TrainState::Converged { iteration } => {
                info!("converged after {iteration} iterations");
                iteration
            }
            _ => {
                self.state = TrainState::MaxIterationsReached;
                warn!("reached max_iterations={max_iterations} without converging");
                max_iterations
            }
        };

        let final_loss = self.loss();
        let accuracy = self.model.accuracy(self.params.view(), &self.dataset);
        info!(
            "final loss {final_loss}, training accuracy {accuracy:.3}, params {}",
            self.params
        );

        TrainReport {
            state: self.state,
            iterations,
            initial_loss,
            final_loss,
            accuracy,
            params: self.params.clone(),
        }
    }
}

impl<M, O> Trainer for ModelTrainer<M, O>
where
    M: Model,
    O: Optimizer,
{
    fn train(&mut self) -> TrainReport {
        self.train()
    }

    fn state(&self) -> TrainState {
        self.state
    }
}
