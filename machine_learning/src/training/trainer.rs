use super::{TrainReport, TrainState};

/// A training run that can be driven without knowing its model or optimizer.
pub trait Trainer {
    /// Runs the training loop until a terminal state is reached.
    fn train(&mut self) -> TrainReport;

    /// Returns the current state of the run.
    fn state(&self) -> TrainState;
}
