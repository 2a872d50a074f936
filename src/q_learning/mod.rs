//! Tabular Q-learning over deterministic transition graphs
//!
//! This module implements off-policy temporal difference learning for
//! environments where an action is identical to the next state it reaches.
//! The estimator runs episodic random-walk rollouts from a random start
//! state to the goal, applying the Q-learning update at every step:
//!
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//!
//! ## Usage Example
//!
//! ```no_run
//! use qpath::environment::fixtures;
//! use qpath::q_learning::QLearningEstimator;
//!
//! # fn main() -> qpath::Result<()> {
//! let env = fixtures::grid_3x3()?;
//! let mut estimator = QLearningEstimator::new(env, 0.1, 0.9)?.with_seed(42);
//! estimator.train(1000);
//!
//! let policy: Vec<_> = estimator
//!     .environment()
//!     .states()
//!     .map(|s| estimator.greedy_policy(s))
//!     .collect();
//! # let _ = policy;
//! # Ok(())
//! # }
//! ```

pub mod estimator;
pub mod q_table;

// Public re-exports
pub use estimator::{EpisodeStats, QLearningEstimator};
pub use q_table::QTable;
