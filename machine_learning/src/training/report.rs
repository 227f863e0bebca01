use ndarray::Array1;

use super::TrainState;

/// The outcome of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// The terminal state reached.
    pub state: TrainState,

    /// The iteration at which the run converged, or the iteration cap.
    pub iterations: usize,

    /// The batch loss at the initial parameters.
    pub initial_loss: f64,

    /// The batch loss at the final parameters.
    pub final_loss: f64,
    /// The fraction of training examples correctly classified by the final params.
    pub accuracy: f64,
    /// The params after the last update.
    pub params: Array1<f64>,
}
