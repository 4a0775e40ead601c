//! Search engines and the traversal they share
//!
//! All three engines walk the game tree the same way: the protagonist moves
//! at max nodes, each adversary moves in index order below it, and the round
//! counter advances when play wraps back to the protagonist. They differ only
//! in how adversary levels are aggregated (see [`Aggregation`]) and in how
//! the root picks among equally valued moves.

pub mod alpha_beta;
pub mod expectimax;
pub mod minimax;
pub mod traversal;

pub use alpha_beta::AlphaBeta;
pub use expectimax::Expectimax;
pub use minimax::Minimax;
pub use traversal::{Aggregation, Window};

use log::warn;

use crate::{config::SearchConfig, game_state::GameState, stats::SearchStatistics, Result};

/// The action chosen by a search and its backed-up value
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<A> {
    /// Chosen protagonist action
    pub action: A,

    /// Value of the root when the protagonist plays `action`
    pub value: f64,
}

/// Game-independent accessors shared by every engine
pub trait SearchEngine {
    /// Short name of the engine, used in logs
    fn name(&self) -> &'static str;

    /// Statistics of the most recent search, including one rejected for its
    /// configuration (which leaves them empty)
    fn statistics(&self) -> &SearchStatistics;
}

/// Common interface of the search engines
///
/// Every engine is driven the same way, so callers can swap one for another
/// without other changes.
pub trait AdversarialSearch<S: GameState>: SearchEngine {
    /// Searches from `state` and returns the chosen action with its value
    ///
    /// # Errors
    ///
    /// - a configuration error if `config` is invalid
    /// - [`SearchError::TerminalState`](crate::SearchError::TerminalState) if `state` is terminal
    /// - [`SearchError::NoLegalActions`](crate::SearchError::NoLegalActions) if any
    ///   non-terminal state reached offers its agent no actions
    /// - [`SearchError::NotANumber`](crate::SearchError::NotANumber) if a value becomes NaN
    fn search(&mut self, state: &S, config: &SearchConfig<S>) -> Result<SearchOutcome<S::Action>>;

    /// Searches from `state` and returns only the chosen action
    fn choose_action(&mut self, state: &S, config: &SearchConfig<S>) -> Result<S::Action> {
        self.search(state, config).map(|outcome| outcome.action)
    }

    /// Returns the engine's value of `state` as a protagonist node
    ///
    /// Unlike [`search`](Self::search) this accepts terminal states, whose
    /// value is their evaluation.
    fn state_value(&mut self, state: &S, config: &SearchConfig<S>) -> Result<f64>;
}

/// Clears `stats` and validates `config` before `engine` searches with it
pub(crate) fn check_config<S>(
    engine: &str,
    config: &SearchConfig<S>,
    stats: &mut SearchStatistics,
) -> Result<()> {
    *stats = SearchStatistics::new();
    config.validate().map_err(|e| {
        warn!("{} refused to search: {}", engine, e);
        e
    })
}
