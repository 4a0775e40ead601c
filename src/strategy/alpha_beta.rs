//! Minimax with alpha-beta pruning

use log::debug;

use crate::{
    config::SearchConfig,
    game_state::GameState,
    stats::SearchStatistics,
    Result,
};

use super::{
    traversal::{Aggregation, Traversal, Window},
    check_config, AdversarialSearch, SearchEngine, SearchOutcome,
};

/// Alpha-beta pruned minimax
///
/// Produces the same values as [`Minimax`](super::Minimax) while skipping
/// branches the bounds prove cannot change the decision. Pruning uses strict
/// comparisons: a max node returns early only once its value exceeds beta,
/// and a min node only once its value drops below alpha.
///
/// Root actions are tried in order and replace the current best only when
/// strictly better, so ties keep the earliest action.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta {
    statistics: SearchStatistics,
}

impl AlphaBeta {
    pub fn new() -> Self {
        AlphaBeta {
            statistics: SearchStatistics::new(),
        }
    }
}

impl<S: GameState> AdversarialSearch<S> for AlphaBeta {
    fn search(&mut self, state: &S, config: &SearchConfig<S>) -> Result<SearchOutcome<S::Action>> {
        check_config("alpha-beta", config, &mut self.statistics)?;

        let mut traversal = Traversal::new(config, Aggregation::Prune, &mut self.statistics);
        let actions = traversal.root_actions(state)?;

        let mut best_index = 0;
        let mut best_value = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;

        for (i, action) in actions.iter().enumerate() {
            let window = Window {
                alpha,
                beta: f64::INFINITY,
            };
            let value = traversal.action_value(state, action, window)?;

            if value > best_value {
                best_value = value;
                best_index = i;
            }
            alpha = alpha.max(best_value);
        }
        traversal.finish();

        debug!(
            "alpha-beta picked action {:?} (value {}) after {} nodes and {} cutoffs",
            actions[best_index], best_value, self.statistics.nodes_expanded, self.statistics.cutoffs
        );

        Ok(SearchOutcome {
            action: actions[best_index].clone(),
            value: best_value,
        })
    }

    fn state_value(&mut self, state: &S, config: &SearchConfig<S>) -> Result<f64> {
        check_config("alpha-beta", config, &mut self.statistics)?;
        let mut traversal = Traversal::new(config, Aggregation::Prune, &mut self.statistics);
        let value = traversal.root_value(state)?;
        traversal.finish();
        Ok(value)
    }
}

impl SearchEngine for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}
