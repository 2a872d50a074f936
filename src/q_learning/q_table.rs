//! Dense Q-table for tabular temporal difference learning

use serde::{Deserialize, Serialize};

use crate::environment::State;

/// Dense action-value table over an N x N transition space
///
/// Rows are source states, columns the next state a transition reaches.
/// Allocated once at zero, mutated only by the update rule, never resized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    /// Q-values, row-major: values[state * state_count + next_state]
    values: Vec<f64>,
    state_count: usize,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a zero-initialized table for `state_count` states.
    pub fn new(state_count: usize, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: vec![0.0; state_count * state_count],
            state_count,
            learning_rate,
            discount_factor,
        }
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Get the Q-value for the transition `state -> next_state`
    pub fn get(&self, state: State, next_state: State) -> f64 {
        self.values[state * self.state_count + next_state]
    }

    fn set(&mut self, state: State, next_state: State, value: f64) {
        self.values[state * self.state_count + next_state] = value;
    }

    /// Maximum Q-value over the given next states, `None` when there are none
    pub fn max_q(&self, state: State, next_states: &[State]) -> Option<f64> {
        next_states
            .iter()
            .map(|&next| self.get(state, next))
            .reduce(f64::max)
    }

    /// Next state with the highest Q-value, ties broken by first occurrence
    ///
    /// An all-zero row (untrained or genuinely tied) yields the first
    /// listed next state. Returns `None` only when `next_states` is empty.
    pub fn greedy_action(&self, state: State, next_states: &[State]) -> Option<State> {
        let (&first, rest) = next_states.split_first()?;
        let mut best = first;
        let mut best_value = self.get(state, first);
        for &next in rest {
            let value = self.get(state, next);
            if value > best_value {
                best = next;
                best_value = value;
            }
        }
        Some(best)
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// `next_actions` are the transitions available from `next_state`; the
    /// continuation value is 0.0 when there are none.
    pub fn q_learning_update(
        &mut self,
        state: State,
        next_state: State,
        reward: f64,
        next_actions: &[State],
    ) {
        let current_q = self.get(state, next_state);
        let max_next_q = self.max_q(next_state, next_actions).unwrap_or(0.0);
        let td_target = reward + self.discount_factor * max_next_q;
        let td_error = td_target - current_q;
        self.set(state, next_state, current_q + self.learning_rate * td_error);
    }

    /// Copy the table out as per-state rows, for reporting
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.state_count)
            .map(|row| row.to_vec())
            .collect()
    }
}
