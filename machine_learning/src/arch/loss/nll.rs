use super::LossFn;
use crate::{MlErr, Result};

/// Negative log-likelihood of a Bernoulli label, also known as binary cross entropy.
///
/// By default the activation is used as is, so an activation of exactly `0.` with a positive
/// label (or `1.` with a negative one) yields an infinite loss.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NegLogLikelihood {
    clamp: Option<f64>,
}

impl NegLogLikelihood {
    /// Returns a new unclamped `NegLogLikelihood`.
    pub fn new() -> Self {
        Self { clamp: None }
    }

    /// Returns a new `NegLogLikelihood` that clamps the activation into `[eps, 1 - eps]` before
    /// taking its logarithm. The gradient is left untouched.
    ///
    /// # Arguments
    /// * `eps` - The distance kept from both ends of the interval, in `[0, 0.5)`.
    ///
    /// # Returns
    /// An error if `eps` is out of range.
    pub fn clamped(eps: f64) -> Result<Self> {
        if !(0. ..0.5).contains(&eps) {
            return Err(MlErr::InvalidHyperparameter {
                name: "clamp",
                value: eps,
            });
        }

        Ok(Self { clamp: Some(eps) })
    }

    /// Returns the clamping distance, if any.
    pub fn clamp(&self) -> Option<f64> {
        self.clamp
    }
}

impl LossFn for NegLogLikelihood {
    fn loss(&self, activation: f64, y: f64) -> f64 {
        let a = match self.clamp {
            Some(eps) => activation.clamp(eps, 1. - eps),
            None => activation,
        };

        if y == 0. { -(1. - a).ln() } else { -a.ln() }
    }

    fn loss_prime(&self, activation: f64, y: f64) -> f64 {
        activation - y
    }
}
