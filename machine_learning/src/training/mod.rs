mod builder;
mod model_trainer;
mod report;
mod state;
mod trainer;

pub use builder::TrainerBuilder;
pub use model_trainer::ModelTrainer;
pub use report::TrainReport;
pub use state::TrainState;
pub use trainer::Trainer;
