use ndarray::{Array1, ArrayView1};

use crate::dataset::Dataset;

pub trait Model {
    /// Returns the amount of parameters in the model.
    fn size(&self) -> usize;

    /// Computes the mean loss and the mean gradient of the loss with respect to the parameters
    /// of the model over every example of the dataset.
    ///
    /// # Arguments
    /// * `params` - The model's parameters.
    /// * `dataset` - The examples to evaluate the model on.
    ///
    /// # Returns
    /// A tuple with the batch loss and a freshly allocated batch gradient.
    ///
    /// # Panics
    /// If `params` or the dataset features don't match the model's size.
    fn batch_loss(&self, params: ArrayView1<f64>, dataset: &Dataset) -> (f64, Array1<f64>);

    /// Returns the fraction of examples in `dataset` whose label is correctly predicted.
    fn accuracy(&self, params: ArrayView1<f64>, dataset: &Dataset) -> f64;
}
