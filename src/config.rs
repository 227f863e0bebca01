use std::{env, error::Error, str::FromStr};

use anyhow::{Context, Result};
use machine_learning::specs::{OptimizerSpec, TrainerSpec};

/// Holds a full `TrainerSpec` as JSON, missing fields take their default value.
pub const SPEC_VAR: &str = "TRAINER_SPEC";
pub const LEARNING_RATE_VAR: &str = "LEARNING_RATE";
pub const MAX_ITERATIONS_VAR: &str = "MAX_ITERATIONS";
pub const EPSILON_VAR: &str = "EPSILON";
pub const SEED_VAR: &str = "SEED";

/// Loads the trainer spec from the process environment.
pub fn load() -> Result<TrainerSpec> {
    load_from(|key| env::var(key).ok())
}

/// Loads the trainer spec from `var`, starting from `TRAINER_SPEC` (or the default spec) and
/// applying the single value overrides on top of it.
pub fn load_from<F>(var: F) -> Result<TrainerSpec>
where
    F: Fn(&str) -> Option<String>,
{
    let mut spec = match var(SPEC_VAR) {
        Some(json) => serde_json::from_str(&json)
            .with_context(|| format!("{SPEC_VAR} is not a valid trainer spec"))?,
        None => TrainerSpec::default(),
    };

    if let Some(learning_rate) = parse(&var, LEARNING_RATE_VAR)? {
        spec.optimizer = OptimizerSpec::GradientDescent { learning_rate };
    }

    if let Some(max_iterations) = parse(&var, MAX_ITERATIONS_VAR)? {
        spec.max_iterations = max_iterations;
    }

    if let Some(epsilon) = parse(&var, EPSILON_VAR)? {
        spec.epsilon = epsilon;
    }

    if let Some(seed) = parse(&var, SEED_VAR)? {
        spec.seed = Some(seed);
    }

    Ok(spec)
}

fn parse<F, T>(var: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    var(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .with_context(|| format!("invalid value {raw:?} for {key}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use machine_learning::specs::InitSpec;

    use super::*;

    fn load_with(vars: &[(&str, &str)]) -> Result<TrainerSpec> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_the_default_spec() {
        assert_eq!(load_with(&[]).unwrap(), TrainerSpec::default());
    }

    #[test]
    fn overrides_are_applied() {
        let spec = load_with(&[
            (LEARNING_RATE_VAR, "0.25"),
            (MAX_ITERATIONS_VAR, "500"),
            (EPSILON_VAR, "1e-2"),
            (SEED_VAR, " 42 "),
        ])
        .unwrap();

        assert_eq!(
            spec.optimizer,
            OptimizerSpec::GradientDescent {
                learning_rate: 0.25
            }
        );
        assert_eq!(spec.max_iterations, 500);
        assert_eq!(spec.epsilon, 1e-2);
        assert_eq!(spec.seed, Some(42));
    }

    #[test]
    fn overrides_win_over_the_json_spec() {
        let json = r#"{ "max_iterations": 10, "init": { "const": { "value": 0.5 } } }"#;

        let spec = load_with(&[(SPEC_VAR, json), (MAX_ITERATIONS_VAR, "20")]).unwrap();

        assert_eq!(spec.max_iterations, 20);
        assert_eq!(spec.init, InitSpec::Const { value: 0.5 });
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(load_with(&[(MAX_ITERATIONS_VAR, "many")]).is_err());
        assert!(load_with(&[(SPEC_VAR, "{ not json")]).is_err());
    }
}
