//! Expectimax: adversaries modeled as uniformly random movers

use log::debug;

use crate::{
    config::SearchConfig,
    game_state::GameState,
    stats::SearchStatistics,
    utils::first_maximal_index,
    Result,
};

use super::{
    traversal::{Aggregation, Traversal, Window},
    check_config, AdversarialSearch, SearchEngine, SearchOutcome,
};

/// Expectimax search
///
/// The protagonist maximizes; each adversary level is a chance node whose
/// value is the mean of its children, every legal action having probability
/// `1 / n`. The first root action with the highest expected value is chosen.
///
/// # Example
///
/// ```
/// use adversarial_search::{AdversarialSearch, Expectimax, GameTree, SearchConfig, TreeNode};
///
/// let tree = TreeNode::branch(vec![TreeNode::leaves(&[0.0, 10.0])]);
/// let state = GameTree::new(tree, 2);
///
/// let mut expectimax = Expectimax::new();
/// let value = expectimax.search(&state, &SearchConfig::default()).unwrap().value;
/// assert_eq!(value, 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Expectimax {
    statistics: SearchStatistics,
}

impl Expectimax {
    pub fn new() -> Self {
        Expectimax {
            statistics: SearchStatistics::new(),
        }
    }
}

impl<S: GameState> AdversarialSearch<S> for Expectimax {
    fn search(&mut self, state: &S, config: &SearchConfig<S>) -> Result<SearchOutcome<S::Action>> {
        check_config("expectimax", config, &mut self.statistics)?;

        let mut traversal = Traversal::new(config, Aggregation::Expectation, &mut self.statistics);
        let actions = traversal.root_actions(state)?;

        let mut values = Vec::with_capacity(actions.len());
        for action in &actions {
            values.push(traversal.action_value(state, action, Window::UNBOUNDED)?);
        }
        traversal.finish();

        let best = first_maximal_index(&values);

        debug!(
            "expectimax picked action {:?} (expected value {}) after {} nodes",
            actions[best], values[best], self.statistics.nodes_expanded
        );

        Ok(SearchOutcome {
            action: actions[best].clone(),
            value: values[best],
        })
    }

    fn state_value(&mut self, state: &S, config: &SearchConfig<S>) -> Result<f64> {
        check_config("expectimax", config, &mut self.statistics)?;
        let mut traversal = Traversal::new(config, Aggregation::Expectation, &mut self.statistics);
        let value = traversal.root_value(state)?;
        traversal.finish();
        Ok(value)
    }
}

impl SearchEngine for Expectimax {
    fn name(&self) -> &'static str {
        "expectimax"
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}
