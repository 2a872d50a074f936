//! Training pipeline for the Q-learning estimator

use serde::{Deserialize, Serialize};

use crate::{Result, ports::Observer, q_learning::QLearningEstimator};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub episodes: usize,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 1000,
            seed: None,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Total transitions taken across all episodes
    pub total_steps: usize,

    /// Total reward collected across all episodes
    pub total_reward: f64,

    /// Mean episode length in transitions
    pub mean_episode_length: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_episodes: usize, total_steps: usize, total_reward: f64) -> Self {
        let mean_episode_length = if total_episodes > 0 {
            total_steps as f64 / total_episodes as f64
        } else {
            0.0
        };

        Self {
            total_episodes,
            total_steps,
            total_reward,
            mean_episode_length,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Training pipeline driving an estimator episode by episode
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run training for the configured number of episodes
    ///
    /// Seeds the estimator when the config carries a seed, then runs one
    /// rollout per episode, notifying observers after each. Goal
    /// reachability is the caller's precondition; check
    /// [`crate::environment::Environment::unreachable_states`] before long
    /// runs on untrusted models.
    pub fn run(&mut self, estimator: &mut QLearningEstimator) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            estimator.set_seed(seed);
        }

        let mut total_steps = 0;
        let mut total_reward = 0.0;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        for episode in 0..self.config.episodes {
            let stats = estimator.run_episode();
            total_steps += stats.steps;
            total_reward += stats.reward;

            for observer in &mut self.observers {
                observer.on_episode_end(episode, stats)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(
            self.config.episodes,
            total_steps,
            total_reward,
        ))
    }
}
