/// A per-example loss over a probabilistic output.
pub trait LossFn {
    /// The loss of predicting `activation` when the expected label is `y`.
    fn loss(&self, activation: f64, y: f64) -> f64;

    /// The derivative of the loss with respect to the pre-activation, that is, the value that
    /// gets multiplied by each feature to obtain the weight gradient.
    fn loss_prime(&self, activation: f64, y: f64) -> f64;
}
