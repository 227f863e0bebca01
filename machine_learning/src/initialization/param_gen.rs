use crate::{MlErr, Result};

/// A `ParamGen` generates values for the initial state of the model's parameters.
pub trait ParamGen {
    /// Should sample at most `n` parameters.
    ///
    /// # Arguments
    /// * `n` - The upper limit of samples to generate.
    ///
    /// # Returns
    /// An option whether the generator is exhausted.
    fn sample(&mut self, n: usize) -> Option<Vec<f64>>;

    /// Samples exactly `n` parameters, draining as many calls to `sample` as needed.
    ///
    /// # Returns
    /// The parameters or an error if the generator got exhausted before reaching `n`.
    fn generate(&mut self, n: usize) -> Result<Vec<f64>> {
        let mut params = Vec::with_capacity(n);

        while params.len() < n {
            let Some(sample) = self.sample(n - params.len()) else {
                break;
            };

            params.extend(sample);
        }

        if params.len() != n {
            return Err(MlErr::SizeMismatch {
                what: "generated params",
                got: params.len(),
                expected: n,
            });
        }

        Ok(params)
    }
}
