pub mod activations;
pub mod loss;
mod logistic;
mod model;

pub use logistic::LogisticRegression;
pub use model::Model;
