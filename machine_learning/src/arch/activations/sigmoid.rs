/// The logistic function, squashes any real number into the open interval `(0, 1)`.
///
/// No overflow guard is needed: for very negative `z`, `exp(-z)` becomes `inf` and the result
/// is `0.`, which the loss function handles as a degenerate activation.
pub fn sigmoid(z: f64) -> f64 {
    1. / (1. + (-z).exp())
}
