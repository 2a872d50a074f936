//! Training pipeline abstractions
//!
//! This module provides a composable pipeline for:
//! - Running episodic training against an estimator
//! - Recording per-episode observations
//! - Summarizing a run into a saveable result

pub mod observers;
pub mod training;

// Re-export observer implementations (adapters)
pub use observers::{MetricsObserver, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::Observer;
