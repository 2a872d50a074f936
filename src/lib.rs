//! Tabular Q-learning for small discrete deterministic environments
//!
//! This crate provides:
//! - An immutable environment model (adjacency + rewards + goal) with
//!   validation and goal-reachability analysis
//! - A tabular Q-learning estimator with episodic random-walk training and
//!   greedy policy extraction
//! - A composable training pipeline with progress and metrics observers
//! - Plain-text reporting of learned value tables and policies
//! - A CLI for training on built-in or file-described environments

pub mod cli;
pub mod environment;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod report;
pub mod utils;

pub use environment::{Environment, EnvironmentBuilder, EnvironmentSpec, State};
pub use error::{Error, Result};
pub use pipeline::{TrainingConfig, TrainingPipeline, TrainingResult};
pub use q_learning::{EpisodeStats, QLearningEstimator, QTable};
