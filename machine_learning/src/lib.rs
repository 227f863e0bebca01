//! Binary logistic regression trained with full-batch gradient descent.
//!
//! The numerical pipeline goes from the [`training`] loop down to the [`arch`] model, which
//! averages the per-example negative log-likelihood and its gradient over a [`dataset`].

pub mod arch;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod optimization;
pub mod specs;
pub mod training;

pub use error::{MlErr, Result};
