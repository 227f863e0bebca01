mod config;

use anyhow::{Context, Result};
use log::info;
use machine_learning::training::{TrainState, TrainerBuilder};

fn main() -> Result<()> {
    env_logger::init();

    let spec = config::load()?;
    info!("loaded spec {spec:?}");

    let builder = TrainerBuilder::new();
    let mut trainer = builder
        .build(&spec)
        .context("failed to build the trainer")?;

    let report = trainer.train();

    if let TrainState::Converged { iteration } = report.state {
        println!("Converged after {iteration} iterations.");
    }

    println!("Loss: {:.6}.", report.final_loss);
    info!(
        "training accuracy {:.3}, params {}",
        report.accuracy, report.params
    );

    Ok(())
}
