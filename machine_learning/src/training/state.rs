/// The states of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainState {
    Running,
    /// The batch loss dropped to epsilon or below at `iteration`.
    Converged { iteration: usize },
    MaxIterationsReached,
}

impl TrainState {
    /// Whether the run has stopped.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TrainState::Running)
    }
}
