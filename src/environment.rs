//! Environment model for tabular Q-learning
//!
//! States are integer ids in `[0, N)`. Transitions are deterministic, so an
//! "action" is simply the next state it leads to: the action space of a
//! state is its list of reachable next states. Rewards attach to ordered
//! (state, next state) pairs and default to zero.
//!
//! The model is immutable after construction. Validation happens once, in
//! [`EnvironmentBuilder::build`] (or [`EnvironmentSpec::build`] for
//! descriptions loaded from a file); the training loop assumes a valid
//! model and does not re-check.

pub mod fixtures;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// State identifier in `[0, state_count)`.
pub type State = usize;

/// Immutable environment: adjacency, rewards, goal, and reporting labels.
#[derive(Debug, Clone)]
pub struct Environment {
    state_count: usize,
    goal: State,
    labels: Vec<String>,
    adjacency: Vec<Vec<State>>,
    rewards: Vec<f64>,
}

impl Environment {
    /// Start building an environment with the given state count and goal.
    pub fn builder(state_count: usize, goal: State) -> EnvironmentBuilder {
        EnvironmentBuilder::new(state_count, goal)
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// The distinguished goal state at which rollouts terminate.
    pub fn goal(&self) -> State {
        self.goal
    }

    /// Iterator over all state ids.
    pub fn states(&self) -> std::ops::Range<State> {
        0..self.state_count
    }

    /// Reporting label for a state.
    pub fn label(&self, state: State) -> &str {
        &self.labels[state]
    }

    /// All state labels, indexed by state id.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Reachable next states from `state`. Non-empty for every state.
    pub fn actions(&self, state: State) -> &[State] {
        &self.adjacency[state]
    }

    /// Immediate reward for the transition `from -> to` (0.0 if unlisted).
    pub fn reward(&self, from: State, to: State) -> f64 {
        self.rewards[from * self.state_count + to]
    }

    /// States from which the goal cannot be reached.
    ///
    /// Training rollouts started in such a state never terminate, so this
    /// is worth checking before a long run. The check is advisory: the
    /// training loop itself does not guard against non-termination.
    pub fn unreachable_states(&self) -> Vec<State> {
        let mut reverse = vec![Vec::new(); self.state_count];
        for state in self.states() {
            for &next in &self.adjacency[state] {
                reverse[next].push(state);
            }
        }

        let mut reaches_goal = vec![false; self.state_count];
        reaches_goal[self.goal] = true;
        let mut queue = VecDeque::from([self.goal]);
        while let Some(state) = queue.pop_front() {
            for &prev in &reverse[state] {
                if !reaches_goal[prev] {
                    reaches_goal[prev] = true;
                    queue.push_back(prev);
                }
            }
        }

        self.states().filter(|&s| !reaches_goal[s]).collect()
    }
}

/// Builder for [`Environment`] with validation at `build` time.
#[derive(Debug, Clone)]
pub struct EnvironmentBuilder {
    state_count: usize,
    goal: State,
    labels: Option<Vec<String>>,
    actions: Vec<(State, Vec<State>)>,
    rewards: Vec<(State, State, f64)>,
}

impl EnvironmentBuilder {
    /// Create a builder for an environment with `state_count` states.
    pub fn new(state_count: usize, goal: State) -> Self {
        Self {
            state_count,
            goal,
            labels: None,
            actions: Vec::new(),
            rewards: Vec::new(),
        }
    }

    /// Set the action list (reachable next states) for one state.
    pub fn actions<I>(mut self, state: State, next_states: I) -> Self
    where
        I: IntoIterator<Item = State>,
    {
        self.actions
            .push((state, next_states.into_iter().collect()));
        self
    }

    /// Set a nonzero reward for the transition `from -> to`.
    pub fn reward(mut self, from: State, to: State, value: f64) -> Self {
        self.rewards.push((from, to, value));
        self
    }

    /// Set reporting labels for all states, in state-id order.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Validate and build the environment.
    pub fn build(self) -> Result<Environment> {
        if self.state_count == 0 {
            return Err(Error::EmptyStateSpace);
        }
        if self.goal >= self.state_count {
            return Err(Error::GoalOutOfRange {
                goal: self.goal,
                state_count: self.state_count,
            });
        }

        let mut adjacency = vec![Vec::new(); self.state_count];
        for (state, next_states) in self.actions {
            if state >= self.state_count {
                return Err(Error::ActionStateOutOfRange {
                    state,
                    state_count: self.state_count,
                });
            }
            adjacency[state] = next_states;
        }

        for (state, next_states) in adjacency.iter().enumerate() {
            if next_states.is_empty() {
                return Err(Error::EmptyActionList { state });
            }
            for &next in next_states {
                if next >= self.state_count {
                    return Err(Error::TransitionOutOfRange {
                        state,
                        next,
                        state_count: self.state_count,
                    });
                }
            }
        }

        let labels = match self.labels {
            Some(labels) => {
                if labels.len() != self.state_count {
                    return Err(Error::LabelCountMismatch {
                        expected: self.state_count,
                        got: labels.len(),
                    });
                }
                labels
            }
            None => (0..self.state_count).map(|s| format!("S{s}")).collect(),
        };

        let mut rewards = vec![0.0; self.state_count * self.state_count];
        for (from, to, value) in self.rewards {
            if from >= self.state_count || to >= self.state_count {
                return Err(Error::RewardOutOfRange {
                    from,
                    to,
                    state_count: self.state_count,
                });
            }
            rewards[from * self.state_count + to] = value;
        }

        Ok(Environment {
            state_count: self.state_count,
            goal: self.goal,
            labels,
            adjacency,
            rewards,
        })
    }
}

/// One sparse reward entry in an [`EnvironmentSpec`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RewardEntry {
    pub from: State,
    pub to: State,
    pub value: f64,
}

/// Serializable environment description, loadable from a JSON file.
///
/// Validated through the same path as the builder: deserializing a spec
/// never yields a usable environment directly, [`EnvironmentSpec::build`]
/// does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentSpec {
    pub state_count: usize,
    pub goal: State,
    /// Reporting labels; defaults to `S0..` when empty.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Action lists indexed by state id.
    pub actions: Vec<Vec<State>>,
    #[serde(default)]
    pub rewards: Vec<RewardEntry>,
}

impl EnvironmentSpec {
    /// Load a description from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(&path).map_err(|source| Error::Io {
            operation: format!("open environment file '{}'", path.as_ref().display()),
            source,
        })?;
        let spec = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(spec)
    }

    /// Validate and build the described environment.
    pub fn build(self) -> Result<Environment> {
        let mut builder = EnvironmentBuilder::new(self.state_count, self.goal);
        if !self.labels.is_empty() {
            builder = builder.labels(self.labels);
        }
        for (state, next_states) in self.actions.into_iter().enumerate() {
            builder = builder.actions(state, next_states);
        }
        for entry in self.rewards {
            builder = builder.reward(entry.from, entry.to, entry.value);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_state() -> EnvironmentBuilder {
        Environment::builder(2, 1)
            .actions(0, [1])
            .actions(1, [1])
            .reward(0, 1, 10.0)
    }

    #[test]
    fn builds_with_default_labels() {
        let env = two_state().build().unwrap();
        assert_eq!(env.state_count(), 2);
        assert_eq!(env.label(0), "S0");
        assert_eq!(env.label(1), "S1");
        assert_eq!(env.reward(0, 1), 10.0);
        assert_eq!(env.reward(1, 0), 0.0);
    }

    #[test]
    fn rejects_empty_state_space() {
        let err = Environment::builder(0, 0).build().unwrap_err();
        assert!(matches!(err, Error::EmptyStateSpace));
    }

    #[test]
    fn rejects_goal_out_of_range() {
        let err = Environment::builder(2, 2)
            .actions(0, [1])
            .actions(1, [1])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::GoalOutOfRange { goal: 2, .. }));
    }

    #[test]
    fn rejects_empty_action_list() {
        let err = Environment::builder(2, 1)
            .actions(1, [1])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::EmptyActionList { state: 0 }));
    }

    #[test]
    fn rejects_out_of_range_transition() {
        let err = two_state().actions(0, [5]).build().unwrap_err();
        assert!(matches!(
            err,
            Error::TransitionOutOfRange { state: 0, next: 5, .. }
        ));
    }

    #[test]
    fn rejects_action_list_for_out_of_range_state() {
        let err = two_state().actions(9, [0]).build().unwrap_err();
        assert!(matches!(
            err,
            Error::ActionStateOutOfRange { state: 9, state_count: 2 }
        ));
    }

    #[test]
    fn rejects_out_of_range_reward() {
        let err = two_state().reward(0, 9, 1.0).build().unwrap_err();
        assert!(matches!(err, Error::RewardOutOfRange { to: 9, .. }));
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let err = two_state().labels(["only-one"]).build().unwrap_err();
        assert!(matches!(
            err,
            Error::LabelCountMismatch { expected: 2, got: 1 }
        ));
    }

    #[test]
    fn unreachable_states_finds_disconnected_component() {
        // 0 -> 1 (goal); 2 loops on itself and never reaches the goal.
        let env = Environment::builder(3, 1)
            .actions(0, [1])
            .actions(1, [1])
            .actions(2, [2])
            .build()
            .unwrap();
        assert_eq!(env.unreachable_states(), vec![2]);
    }

    #[test]
    fn fully_connected_has_no_unreachable_states() {
        let env = fixtures::grid_3x3().unwrap();
        assert!(env.unreachable_states().is_empty());
    }

    #[test]
    fn spec_round_trips_through_json() {
        let json = r#"{
            "state_count": 2,
            "goal": 1,
            "labels": ["start", "goal"],
            "actions": [[1], [1]],
            "rewards": [{"from": 0, "to": 1, "value": 5.0}]
        }"#;
        let spec: EnvironmentSpec = serde_json::from_str(json).unwrap();
        let env = spec.build().unwrap();
        assert_eq!(env.label(0), "start");
        assert_eq!(env.reward(0, 1), 5.0);
    }

    #[test]
    fn spec_validation_rejects_missing_actions() {
        let spec = EnvironmentSpec {
            state_count: 2,
            goal: 1,
            labels: Vec::new(),
            actions: vec![vec![1]],
            rewards: Vec::new(),
        };
        assert!(matches!(
            spec.build().unwrap_err(),
            Error::EmptyActionList { state: 1 }
        ));
    }
}
