//! # adversarial-search
//!
//! Depth-limited adversarial game-tree search for turn-alternating games with
//! one maximizing protagonist and any number of adversaries.
//!
//! Three interchangeable engines share one call shape, so a caller can swap
//! them without touching anything else:
//!
//! - [`Minimax`]: every adversary minimizes; ties between equally good root
//!   moves are broken uniformly at random with an injectable RNG.
//! - [`AlphaBeta`]: the same values as [`Minimax`], with branch-and-bound
//!   pruning. Ties keep the first move seen.
//! - [`Expectimax`]: every adversary picks uniformly at random among its
//!   legal actions, so adversary levels average instead of minimizing.
//!
//! ## Basic Usage
//!
//! ```
//! use adversarial_search::{
//!     AdversarialSearch, AlphaBeta, GameState, Minimax, SearchConfig, SearchEngine,
//!     ScoreEvaluation,
//! };
//!
//! // A race along a corridor: the protagonist steps left or right, then the
//! // single adversary pushes it one square either way.
//! #[derive(Clone)]
//! struct Corridor {
//!     position: i32,
//! }
//!
//! impl GameState for Corridor {
//!     type Action = i32;
//!
//!     fn is_win(&self) -> bool {
//!         self.position >= 4
//!     }
//!
//!     fn is_lose(&self) -> bool {
//!         self.position <= -4
//!     }
//!
//!     fn num_agents(&self) -> usize {
//!         2
//!     }
//!
//!     fn legal_actions(&self, agent: usize) -> Vec<i32> {
//!         if agent == 0 { vec![-1, 1, 2] } else { vec![-1, 1] }
//!     }
//!
//!     fn successor(&self, _agent: usize, step: &i32) -> Self {
//!         Corridor { position: self.position + step }
//!     }
//!
//!     fn score(&self) -> f64 {
//!         self.position as f64
//!     }
//! }
//!
//! fn main() -> Result<(), adversarial_search::SearchError> {
//!     let config = SearchConfig::new(2, ScoreEvaluation)?;
//!     let start = Corridor { position: 0 };
//!
//!     let mut minimax = Minimax::seeded(7);
//!     let mut alpha_beta = AlphaBeta::new();
//!
//!     let slow = minimax.search(&start, &config)?;
//!     let fast = alpha_beta.search(&start, &config)?;
//!
//!     assert_eq!(slow.action, 2);
//!     assert_eq!(slow.value, fast.value);
//!     println!("{}", alpha_beta.statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Rounds and depth
//!
//! The configured depth counts full rounds. One round is one protagonist move
//! followed by one move from each adversary in index order, so a search never
//! goes more than `depth * num_agents` moves below the root before the
//! evaluation function is applied. Terminal states are evaluated as soon as
//! they are reached.
//!
//! ## Evaluation functions
//!
//! Any `Fn(&S) -> f64` closure is an [`EvaluationFunction`]. Named functions
//! can be collected in an [`EvaluationRegistry`] and resolved from
//! configuration with [`SearchConfig::from_registry`].

pub mod config;
pub mod evaluation;
pub mod game_state;
pub mod stats;
pub mod strategy;
pub mod tree;
pub mod utils;

pub use config::SearchConfig;
pub use evaluation::{EvaluationFunction, EvaluationRegistry, ProximityEvaluation, ScoreEvaluation};
pub use game_state::{Action, Coord, GameState, SpatialState, PROTAGONIST};
pub use stats::SearchStatistics;
pub use strategy::{AdversarialSearch, AlphaBeta, Expectimax, Minimax, SearchEngine, SearchOutcome};
pub use tree::{GameTree, TreeNode};

/// Error types for adversarial search
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// No evaluation function is registered under the requested name
    #[error("Unknown evaluation function: {0}")]
    UnknownEvaluation(String),

    /// The search depth must be at least one round
    #[error("Invalid search depth {0}: depth must be at least 1")]
    InvalidDepth(usize),

    /// A non-terminal state offered an agent nothing to do
    #[error("No legal actions for agent {agent} in a non-terminal state")]
    NoLegalActions { agent: usize },

    /// The evaluation function produced NaN, or an expectation mixed opposite infinities
    #[error("Search value is NaN")]
    NotANumber,

    /// The search was started from a state where the game is already over
    #[error("Cannot choose an action from a terminal state")]
    TerminalState,
}

impl SearchError {
    /// Returns true for errors caused by the search configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SearchError::UnknownEvaluation(_) | SearchError::InvalidDepth(_)
        )
    }

    /// Returns true for errors caused by a state breaking the game state contract
    ///
    /// Starting a search from a terminal state is a caller mistake rather
    /// than a broken state, so [`SearchError::TerminalState`] is not included.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, SearchError::NoLegalActions { .. })
    }
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
