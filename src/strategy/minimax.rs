//! Exhaustive depth-limited minimax

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    config::SearchConfig,
    game_state::{GameState, PROTAGONIST},
    stats::SearchStatistics,
    utils::{max_value, maximal_indices},
    Result, SearchError,
};

use super::{
    traversal::{Aggregation, Traversal, Window},
    check_config, AdversarialSearch, SearchEngine, SearchOutcome,
};

/// Minimax search with randomized tie-breaking
///
/// The protagonist maximizes and every adversary minimizes. When several
/// root actions share the best value, one of them is picked uniformly at
/// random from the engine's own RNG, so repeated play does not always favor
/// the first of them.
///
/// # Example
///
/// ```
/// use adversarial_search::{AdversarialSearch, GameTree, Minimax, SearchConfig, TreeNode};
///
/// // Two protagonist moves, each answered by one adversary move.
/// let tree = TreeNode::branch(vec![
///     TreeNode::leaves(&[3.0, 12.0]),
///     TreeNode::leaves(&[2.0, 4.0]),
/// ]);
/// let state = GameTree::new(tree, 2);
///
/// let mut minimax = Minimax::seeded(42);
/// let outcome = minimax.search(&state, &SearchConfig::default()).unwrap();
/// assert_eq!(outcome.action, 0);
/// assert_eq!(outcome.value, 3.0);
/// ```
pub struct Minimax<R = StdRng> {
    rng: R,
    statistics: SearchStatistics,
}

impl Minimax<StdRng> {
    /// Creates a minimax engine seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a minimax engine whose tie-breaks are reproducible
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Minimax<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Minimax<R> {
    /// Creates a minimax engine drawing tie-breaks from `rng`
    pub fn with_rng(rng: R) -> Self {
        Minimax {
            rng,
            statistics: SearchStatistics::new(),
        }
    }
}

impl<S: GameState, R: Rng> AdversarialSearch<S> for Minimax<R> {
    fn search(&mut self, state: &S, config: &SearchConfig<S>) -> Result<SearchOutcome<S::Action>> {
        check_config("minimax", config, &mut self.statistics)?;

        let mut traversal = Traversal::new(config, Aggregation::Minimize, &mut self.statistics);
        let actions = traversal.root_actions(state)?;

        let mut values = Vec::with_capacity(actions.len());
        for action in &actions {
            values.push(traversal.action_value(state, action, Window::UNBOUNDED)?);
        }
        traversal.finish();

        let best = max_value(&values);
        let tied = maximal_indices(&values);
        let index = *tied
            .choose(&mut self.rng)
            .ok_or(SearchError::NoLegalActions { agent: PROTAGONIST })?;

        debug!(
            "minimax picked action {:?} (value {}, {} of {} tied) after {} nodes",
            actions[index],
            best,
            tied.len(),
            actions.len(),
            self.statistics.nodes_expanded
        );

        Ok(SearchOutcome {
            action: actions[index].clone(),
            value: best,
        })
    }

    fn state_value(&mut self, state: &S, config: &SearchConfig<S>) -> Result<f64> {
        check_config("minimax", config, &mut self.statistics)?;
        let mut traversal = Traversal::new(config, Aggregation::Minimize, &mut self.statistics);
        let value = traversal.root_value(state)?;
        traversal.finish();
        Ok(value)
    }
}

impl<R: Rng> SearchEngine for Minimax<R> {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}
