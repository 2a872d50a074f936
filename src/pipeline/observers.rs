//! Observer implementations for training pipelines
//!
//! Observers allow composable data collection during training without
//! coupling the episode loop to specific output formats.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, ports::Observer, q_learning::EpisodeStats};

/// Progress bar observer - shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    total_steps: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            total_steps: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, stats: EpisodeStats) -> Result<()> {
        self.total_steps += stats.steps;
        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(format!("{} steps", self.total_steps));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} steps", self.total_steps));
        }
        Ok(())
    }
}

/// Metrics observer - aggregates per-episode statistics
pub struct MetricsObserver {
    episodes: usize,
    total_steps: usize,
    total_reward: f64,
    longest_episode: usize,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            episodes: 0,
            total_steps: 0,
            total_reward: 0.0,
            longest_episode: 0,
        }
    }

    pub fn episodes(&self) -> usize {
        self.episodes
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    pub fn longest_episode(&self) -> usize {
        self.longest_episode
    }

    /// Mean episode length over everything observed so far.
    pub fn mean_episode_length(&self) -> f64 {
        if self.episodes > 0 {
            self.total_steps as f64 / self.episodes as f64
        } else {
            0.0
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, stats: EpisodeStats) -> Result<()> {
        self.episodes += 1;
        self.total_steps += stats.steps;
        self.total_reward += stats.reward;
        self.longest_episode = self.longest_episode.max(stats.steps);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_observer_aggregates_episode_stats() {
        let mut observer = MetricsObserver::new();
        let stats = [
            EpisodeStats {
                start: 0,
                steps: 3,
                reward: 100.0,
            },
            EpisodeStats {
                start: 5,
                steps: 7,
                reward: 0.0,
            },
        ];
        for (i, s) in stats.into_iter().enumerate() {
            observer.on_episode_end(i, s).unwrap();
        }

        assert_eq!(observer.episodes(), 2);
        assert_eq!(observer.total_steps(), 10);
        assert_eq!(observer.total_reward(), 100.0);
        assert_eq!(observer.longest_episode(), 7);
        assert_eq!(observer.mean_episode_length(), 5.0);
    }
}
