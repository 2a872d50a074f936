//! Check command - validate an environment description

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    environment::{Environment, EnvironmentSpec, fixtures},
};

#[derive(Parser, Debug)]
#[command(about = "Validate an environment and report goal reachability")]
pub struct CheckArgs {
    /// JSON environment description to check (defaults to the grid3x3 fixture)
    pub environment: Option<PathBuf>,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let (env, source): (Environment, String) = match &args.environment {
        Some(path) => {
            let env = EnvironmentSpec::load(path)
                .and_then(EnvironmentSpec::build)
                .with_context(|| format!("invalid environment file '{}'", path.display()))?;
            (env, path.display().to_string())
        }
        None => (fixtures::grid_3x3()?, "grid3x3".to_string()),
    };

    print_section("Environment");
    print_kv("source", &source);
    print_kv("states", &env.state_count().to_string());
    print_kv("goal", env.label(env.goal()));
    let transitions: usize = env.states().map(|s| env.actions(s).len()).sum();
    print_kv("transitions", &transitions.to_string());

    let unreachable = env.unreachable_states();
    if unreachable.is_empty() {
        println!("\nAll states reach the goal.");
    } else {
        let labels: Vec<_> = unreachable.iter().map(|&s| env.label(s)).collect();
        println!(
            "\nWarning: the goal is unreachable from: {}",
            labels.join(", ")
        );
        println!("Training episodes started in these states will not terminate.");
    }

    Ok(())
}
