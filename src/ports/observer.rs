//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events, allowing
//! composable data collection without coupling the training pipeline to
//! specific output formats or metrics.

use crate::{Result, q_learning::EpisodeStats};

/// Observer trait for monitoring training
///
/// Observers can be composed to collect different kinds of data during a
/// run: progress bars for user feedback, metric aggregation for summaries.
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - once at the beginning
/// 2. `on_episode_end(episode, stats)` - after every rollout
/// 3. `on_training_end()` - once at the end
///
/// # Examples
///
/// ```no_run
/// use qpath::{ports::Observer, q_learning::EpisodeStats};
///
/// struct EpisodeCounter {
///     episodes: usize,
/// }
///
/// impl Observer for EpisodeCounter {
///     fn on_episode_end(&mut self, _episode: usize, _stats: EpisodeStats) -> qpath::Result<()> {
///         self.episodes += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each episode completes.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the finished episode (0-based)
    /// * `stats` - Start state, step count, and reward for the rollout
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to record per-episode data.
    fn on_episode_end(&mut self, _episode: usize, _stats: EpisodeStats) -> Result<()> {
        Ok(())
    }

    /// Called when training ends.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to flush or finalize observation state.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
