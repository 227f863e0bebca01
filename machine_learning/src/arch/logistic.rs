use ndarray::{Array1, ArrayView1};

use super::{
    Model,
    activations::sigmoid,
    loss::{LossFn, NegLogLikelihood},
};
use crate::dataset::Dataset;

/// A binary logistic regression: the probability of the positive class is the sigmoid of the
/// dot product between the parameters and the features.
///
/// The bias is not special cased, it is expected to be a constant `1.` feature of every example.
#[derive(Debug, Clone)]
pub struct LogisticRegression<L: LossFn = NegLogLikelihood> {
    size: usize,
    loss_fn: L,
}

impl<L: LossFn> LogisticRegression<L> {
    /// Creates a new `LogisticRegression`.
    ///
    /// # Arguments
    /// * `size` - The amount of features per example, bias included.
    /// * `loss_fn` - The per-example loss to minimize.
    pub fn new(size: usize, loss_fn: L) -> Self {
        Self { size, loss_fn }
    }

    /// Returns the loss function of this model.
    pub fn loss_fn(&self) -> &L {
        &self.loss_fn
    }

    /// Computes the estimated probability that the label of `x` is `1`.
    ///
    /// # Panics
    /// If `params` and `x` have different lengths.
    pub fn activation(&self, params: ArrayView1<f64>, x: ArrayView1<f64>) -> f64 {
        assert_eq!(
            params.len(),
            x.len(),
            "params and features must have the same length"
        );

        sigmoid(params.dot(&x))
    }

    /// Predicts the label of `x`, `1.` whenever the activation is at least one half.
    pub fn predict(&self, params: ArrayView1<f64>, x: ArrayView1<f64>) -> f64 {
        if self.activation(params, x) >= 0.5 {
            1.
        } else {
            0.
        }
    }

    /// Computes the loss of a single example and its gradient with respect to the parameters.
    ///
    /// # Arguments
    /// * `params` - The model's parameters.
    /// * `x` - The example's features.
    /// * `y` - The example's label, either `0.` or `1.`.
    ///
    /// # Returns
    /// A tuple with the loss and the gradient, which has the same length as `params`.
    pub fn example_loss(
        &self,
        params: ArrayView1<f64>,
        x: ArrayView1<f64>,
        y: f64,
    ) -> (f64, Array1<f64>) {
        let a = self.activation(params, x);
        let loss = self.loss_fn.loss(a, y);
        let d = self.loss_fn.loss_prime(a, y);

        (loss, x.mapv(|xi| xi * d))
    }
}

impl<L: LossFn> Model for LogisticRegression<L> {
    fn size(&self) -> usize {
        self.size
    }

    fn batch_loss(&self, params: ArrayView1<f64>, dataset: &Dataset) -> (f64, Array1<f64>) {
        assert_eq!(params.len(), self.size, "params must match the model size");
        assert_eq!(
            dataset.x_size(),
            self.size,
            "dataset features must match the model size"
        );
        assert!(!dataset.is_empty(), "dataset must not be empty");

        let n = dataset.len() as f64;
        let mut batch_loss = 0.;
        let mut batch_grad = Array1::zeros(self.size);

        for (x, y) in dataset.iter() {
            let (loss, grad) = self.example_loss(params, x, y);

            batch_loss += loss / n;
            batch_grad.scaled_add(1. / n, &grad);
        }

        (batch_loss, batch_grad)
    }

    fn accuracy(&self, params: ArrayView1<f64>, dataset: &Dataset) -> f64 {
        let hits = dataset
            .iter()
            .filter(|&(x, y)| self.predict(params, x) == y)
            .count();

        hits as f64 / dataset.len() as f64
    }
}
