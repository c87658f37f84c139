// Demonstration: build a registered point-robot variant and evaluate a baseline policy.
//
//   cargo run --example point_env_demo -- --env sparse-point-robot --policy goal --episodes 16
//
// Set RUST_LOG=debug to see task switches.

use std::env;

use point_robot::{
    make_env, EvaluationMetrics, GoalSeekingPolicy, Policy, Position, RandomPolicy, RngMode,
    VariantParams,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let env_name = arg_value(&args, "--env").unwrap_or("sparse-point-robot");
    let policy_name = arg_value(&args, "--policy").unwrap_or("goal");
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(16);
    let horizon: usize = arg_value(&args, "--horizon")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let randomize_tasks = args.iter().any(|a| a == "--randomize");

    let params = VariantParams {
        randomize_tasks: randomize_tasks.then_some(true),
        rng: Some(RngMode::Seeded(seed)),
        ..VariantParams::default()
    };
    let mut env = make_env(env_name, &params)?;

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(RngMode::Seeded(seed))),
        "goal" => Box::new(GoalSeekingPolicy::new(Position::origin())),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'goal' or 'random'.", other);
            std::process::exit(2);
        }
    };

    let metrics = EvaluationMetrics::evaluate(&mut env, policy.as_mut(), episodes, horizon)?;
    println!("Env: {} ({} tasks)", env_name, env.n_tasks());
    println!("Policy: {}", policy.name());
    println!("{}", metrics);
    Ok(())
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
