use machine_learning::{
    arch::{LogisticRegression, Model, loss::NegLogLikelihood},
    dataset::Dataset,
    optimization::GradientDescent,
    specs::{DatasetSpec, InitSpec, LossFnSpec, TrainerSpec},
    training::{ModelTrainer, TrainState, TrainerBuilder},
};
use ndarray::array;

fn default_dataset() -> Dataset {
    let spec = DatasetSpec::default();
    Dataset::new(spec.data, spec.x_size).unwrap()
}

fn fixed_spec(max_iterations: usize) -> TrainerSpec {
    TrainerSpec {
        init: InitSpec::Fixed {
            values: vec![0.5, 0.5],
        },
        max_iterations,
        ..Default::default()
    }
}

#[test]
fn default_run_from_fixed_params_terminates_and_improves() {
    let model = LogisticRegression::new(2, NegLogLikelihood::new());
    let (expected_initial, _) = model.batch_loss(array![0.5, 0.5].view(), &default_dataset());

    let spec = fixed_spec(1_000_000);
    let mut trainer = TrainerBuilder::new().build(&spec).unwrap();
    let report = trainer.train();

    assert!(report.state.is_terminal());
    assert!(report.iterations <= spec.max_iterations);
    assert_eq!(report.initial_loss, expected_initial);
    assert!(
        report.final_loss <= report.initial_loss,
        "final {} > initial {}",
        report.final_loss,
        report.initial_loss
    );

    if let TrainState::Converged { .. } = report.state {
        assert!(report.final_loss <= spec.epsilon);
    }
}

#[test]
fn batch_loss_strictly_decreases_while_running() {
    let model = LogisticRegression::new(2, NegLogLikelihood::new());
    let optimizer = GradientDescent::new(1.).unwrap();
    let mut trainer = ModelTrainer::new(
        model,
        optimizer,
        default_dataset(),
        vec![0.5, 0.5],
        1_000,
        1e-3,
    )
    .unwrap();

    let mut prev = f64::INFINITY;
    for iteration in 0..1_000 {
        let (loss, state) = trainer.step(iteration);

        assert_eq!(state, TrainState::Running);
        assert!(loss < prev, "iteration {iteration}: {loss} >= {prev}");
        prev = loss;
    }
}

#[test]
fn longer_runs_reach_lower_losses() {
    let losses: Vec<f64> = [10, 100, 1_000, 10_000]
        .into_iter()
        .map(|max_iterations| {
            let mut trainer = TrainerBuilder::new()
                .build(&fixed_spec(max_iterations))
                .unwrap();
            trainer.train().final_loss
        })
        .collect();

    for pair in losses.windows(2) {
        assert!(pair[1] < pair[0], "{losses:?}");
    }
}

#[test]
fn same_seed_same_report() {
    let spec = TrainerSpec {
        seed: Some(1234),
        max_iterations: 500,
        ..Default::default()
    };
    let builder = TrainerBuilder::new();

    let a = builder.build(&spec).unwrap().train();
    let b = builder.build(&spec).unwrap().train();

    assert_eq!(a, b);
}

#[test]
fn trained_params_separate_the_default_dataset() {
    let mut trainer = TrainerBuilder::new().build(&fixed_spec(50_000)).unwrap();
    let report = trainer.train();

    let model = LogisticRegression::new(2, NegLogLikelihood::new());
    let accuracy = model.accuracy(report.params.view(), &default_dataset());

    assert_eq!(accuracy, 1., "params: {}", report.params);
    assert_eq!(report.accuracy, accuracy);
}

#[test]
fn clamped_loss_trains_like_the_unclamped_one() {
    let clamped = TrainerSpec {
        loss: LossFnSpec::NegLogLikelihood { clamp: Some(1e-15) },
        ..fixed_spec(1_000)
    };

    let a = TrainerBuilder::new().build(&fixed_spec(1_000)).unwrap().train();
    let b = TrainerBuilder::new().build(&clamped).unwrap().train();

    assert_eq!(a.params, b.params);
    assert!((a.final_loss - b.final_loss).abs() < 1e-12);
}

#[test]
fn empty_dataset_is_rejected() {
    let spec = TrainerSpec {
        dataset: DatasetSpec {
            data: vec![],
            x_size: 2,
        },
        ..Default::default()
    };

    assert!(TrainerBuilder::new().build(&spec).is_err());
}
