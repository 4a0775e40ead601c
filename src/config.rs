//! Configuration options for the search engines
//!
//! A configuration holds the protagonist's depth limit, counted in full
//! rounds, and the evaluation function applied at the cutoff.

use std::fmt;
use std::sync::Arc;

use crate::{
    evaluation::{EvaluationFunction, EvaluationRegistry, ScoreEvaluation},
    game_state::GameState,
    Result, SearchError,
};

/// Default search depth in rounds
pub const DEFAULT_DEPTH: usize = 2;

/// Configuration for a search
///
/// Construct with [`SearchConfig::new`] or [`SearchConfig::from_registry`],
/// which reject invalid settings up front, or start from `default()` and use
/// the builder methods.
///
/// # Example
///
/// ```
/// use adversarial_search::{GameTree, SearchConfig, ScoreEvaluation};
///
/// let config = SearchConfig::<GameTree>::default()
///     .with_depth(4)
///     .with_evaluation(|tree: &GameTree| tree.estimate() * 0.5);
/// assert_eq!(config.depth, 4);
/// assert!(config.validate().is_ok());
///
/// assert!(SearchConfig::<GameTree>::new(0, ScoreEvaluation).is_err());
/// ```
pub struct SearchConfig<S> {
    /// Number of full rounds to search below the root
    ///
    /// One round is a protagonist move followed by one move from each
    /// adversary. Must be at least 1.
    pub depth: usize,

    /// Function used to score terminal states and states at the cutoff
    pub evaluation: Arc<dyn EvaluationFunction<S>>,
}

impl<S> SearchConfig<S> {
    /// Creates a validated configuration
    pub fn new<F>(depth: usize, evaluation: F) -> Result<Self>
    where
        F: EvaluationFunction<S> + 'static,
    {
        let config = SearchConfig {
            depth,
            evaluation: Arc::new(evaluation),
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a validated configuration using a named evaluation function
    pub fn from_registry(registry: &EvaluationRegistry<S>, name: &str, depth: usize) -> Result<Self> {
        let config = SearchConfig {
            depth,
            evaluation: registry.get(name)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the search depth
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the evaluation function
    pub fn with_evaluation<F>(mut self, evaluation: F) -> Self
    where
        F: EvaluationFunction<S> + 'static,
    {
        self.evaluation = Arc::new(evaluation);
        self
    }

    /// Checks that the configuration can be searched with
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(SearchError::InvalidDepth(self.depth));
        }
        Ok(())
    }

    /// Applies the configured evaluation function
    pub fn evaluate(&self, state: &S) -> f64 {
        self.evaluation.evaluate(state)
    }
}

impl<S: GameState> Default for SearchConfig<S> {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            evaluation: Arc::new(ScoreEvaluation),
        }
    }
}

impl<S> Clone for SearchConfig<S> {
    fn clone(&self) -> Self {
        SearchConfig {
            depth: self.depth,
            evaluation: Arc::clone(&self.evaluation),
        }
    }
}

impl<S> fmt::Debug for SearchConfig<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
