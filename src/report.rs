//! Plain-text rendering of learned values and policies

use crate::q_learning::QLearningEstimator;

/// Render the full value table, one line per source state.
///
/// Values print with two decimals, matching the classic console output of
/// the nine-state example ("out from A:  0.00 0.00 80.00 ...").
pub fn format_value_table(estimator: &QLearningEstimator) -> String {
    let env = estimator.environment();
    let rows = estimator.value_snapshot().to_rows();
    let mut out = String::new();
    for state in env.states() {
        out.push_str(&format!("out from {}: ", env.label(state)));
        for value in &rows[state] {
            out.push_str(&format!(" {value:.2}"));
        }
        out.push('\n');
    }
    out
}

/// Render the greedy policy, one line per state ("from A goto B").
pub fn format_policy(estimator: &QLearningEstimator) -> String {
    let env = estimator.environment();
    let mut out = String::new();
    for state in env.states() {
        let target = estimator.greedy_policy(state);
        out.push_str(&format!(
            "from {} goto {}\n",
            env.label(state),
            env.label(target)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;

    fn estimator() -> QLearningEstimator {
        let env = Environment::builder(2, 1)
            .labels(["A", "B"])
            .actions(0, [1])
            .actions(1, [1])
            .reward(0, 1, 10.0)
            .build()
            .unwrap();
        QLearningEstimator::new(env, 1.0, 0.9).unwrap()
    }

    #[test]
    fn value_table_uses_labels_and_two_decimals() {
        let mut est = estimator().with_seed(1);
        est.train(50);
        let rendered = format_value_table(&est);
        assert!(rendered.starts_with("out from A: "));
        assert!(rendered.contains("10.00"), "rendered: {rendered}");
    }

    #[test]
    fn policy_lines_name_source_and_target() {
        let est = estimator();
        let rendered = format_policy(&est);
        assert_eq!(rendered, "from A goto B\nfrom B goto B\n");
    }
}
