//! Train command - run episodic Q-learning and report the result

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    environment::{Environment, EnvironmentSpec, fixtures},
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline, TrainingResult},
    q_learning::QLearningEstimator,
    report,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FixtureArg {
    /// Cleaned-up 3x3 grid topology
    #[value(name = "grid3x3")]
    Grid3x3,
    /// Nine-state instance with its tables preserved as shipped
    #[value(name = "legacy")]
    Legacy,
}

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning estimator", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Built-in environment to train on
    #[arg(long, value_enum, default_value = "grid3x3")]
    pub fixture: FixtureArg,

    /// JSON environment description (overrides --fixture)
    #[arg(long, short = 'e')]
    pub environment: Option<PathBuf>,

    /// Number of training episodes
    #[arg(long, short = 'n', default_value_t = 1000)]
    pub episodes: usize,

    /// Learning rate alpha, in (0, 1]
    #[arg(long, default_value_t = 0.1)]
    pub alpha: f64,

    /// Discount factor gamma, in [0, 1]
    #[arg(long, default_value_t = 0.9)]
    pub gamma: f64,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    training: TrainingResult,
    metadata: SummaryMetadata,
}

#[derive(Debug, Serialize)]
struct SummaryMetadata {
    source: String,
    state_count: usize,
    goal: String,
    alpha: f64,
    gamma: f64,
    seed: Option<u64>,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

fn load_environment(args: &TrainArgs) -> Result<(Environment, String)> {
    match &args.environment {
        Some(path) => {
            let env = EnvironmentSpec::load(path)
                .and_then(EnvironmentSpec::build)
                .with_context(|| format!("invalid environment file '{}'", path.display()))?;
            Ok((env, path.display().to_string()))
        }
        None => {
            let (env, name) = match args.fixture {
                FixtureArg::Grid3x3 => (fixtures::grid_3x3()?, "grid3x3"),
                FixtureArg::Legacy => (fixtures::legacy_grid()?, "legacy"),
            };
            Ok((env, name.to_string()))
        }
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let (env, source) = load_environment(&args)?;

    let unreachable = env.unreachable_states();
    if !unreachable.is_empty() {
        let labels: Vec<_> = unreachable.iter().map(|&s| env.label(s)).collect();
        eprintln!(
            "Warning: the goal is unreachable from {}; episodes starting there will not terminate.",
            labels.join(", ")
        );
    }

    let goal_label = env.label(env.goal()).to_string();
    let state_count = env.state_count();

    let mut estimator = QLearningEstimator::new(env, args.alpha, args.gamma)?;
    if let Some(seed) = args.seed {
        estimator.set_seed(seed);
    }

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        episodes: args.episodes,
        seed: args.seed,
    });
    if !args.quiet {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let started = Instant::now();
    let result = pipeline.run(&mut estimator)?;
    let elapsed = started.elapsed();

    print_section("Learned values");
    print!("{}", report::format_value_table(&estimator));

    print_section("Greedy policy");
    print!("{}", report::format_policy(&estimator));

    print_section("Run summary");
    print_kv("episodes", &format_number(result.total_episodes));
    print_kv("total steps", &format_number(result.total_steps));
    print_kv(
        "mean episode length",
        &format!("{:.2}", result.mean_episode_length),
    );
    print_kv("total reward", &format!("{:.2}", result.total_reward));
    print_kv("elapsed", &format!("{:.3} sec", elapsed.as_secs_f64()));

    if let Some(summary) = &args.summary {
        let path = sanitize_summary_path(summary);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create summary directory '{}'", parent.display()))?;
        }
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create summary file '{}'", path.display()))?;
        let summary_file = TrainingSummaryFile {
            training: result,
            metadata: SummaryMetadata {
                source,
                state_count,
                goal: goal_label,
                alpha: args.alpha,
                gamma: args.gamma,
                seed: args.seed,
            },
        };
        to_writer_pretty(file, &summary_file)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
