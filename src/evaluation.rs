//! Static evaluation functions and the registry used to select them by name
//!
//! An evaluation function scores a state at the depth cutoff (or at a
//! terminal state) in place of searching further.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{
    game_state::{GameState, SpatialState, PROTAGONIST},
    Result, SearchError,
};

/// Trait for functions that map a state to a desirability score
///
/// Higher is better for the protagonist. Returning `f64::INFINITY` or
/// `f64::NEG_INFINITY` marks forced wins and losses; returning NaN is an
/// error that aborts the search.
pub trait EvaluationFunction<S>: Send + Sync {
    /// Scores the given state
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> EvaluationFunction<S> for F
where
    F: Fn(&S) -> f64 + Send + Sync,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Default evaluation: the state's own score
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluation;

impl<S: GameState> EvaluationFunction<S> for ScoreEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

/// Score adjusted for how close the adversaries are
///
/// Computes `score - nearest - threatening`, where `nearest` is the
/// Manhattan distance to the closest adversary and `threatening` counts the
/// adversaries within `threshold` steps. With no adversaries both terms are 0.
#[derive(Debug, Clone, Copy)]
pub struct ProximityEvaluation {
    /// Distance at or below which an adversary counts as threatening
    pub threshold: u64,
}

impl ProximityEvaluation {
    /// Creates a proximity evaluation with the given threat threshold
    pub fn new(threshold: u64) -> Self {
        ProximityEvaluation { threshold }
    }
}

impl Default for ProximityEvaluation {
    fn default() -> Self {
        Self::new(2)
    }
}

impl<S: SpatialState> EvaluationFunction<S> for ProximityEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        let protagonist = state.position_of(PROTAGONIST);
        let distances: Vec<u64> = (1..state.num_agents())
            .map(|agent| protagonist.manhattan_distance(&state.position_of(agent)))
            .collect();

        let nearest = distances.iter().copied().min().unwrap_or(0);
        let threatening = distances.iter().filter(|&&d| d <= self.threshold).count();

        state.score() - nearest as f64 - threatening as f64
    }
}

/// Name of the default evaluation function
pub const DEFAULT_EVALUATION: &str = "score";

/// Explicit mapping from configuration names to evaluation functions
///
/// # Example
///
/// ```
/// use adversarial_search::{EvaluationRegistry, GameTree, SearchConfig};
///
/// let mut registry = EvaluationRegistry::<GameTree>::standard();
/// registry.register("double", |state: &GameTree| 2.0 * state.estimate());
///
/// let config = SearchConfig::from_registry(&registry, "double", 3).unwrap();
/// assert_eq!(config.depth, 3);
/// assert!(SearchConfig::from_registry(&registry, "missing", 3).is_err());
/// ```
pub struct EvaluationRegistry<S> {
    functions: HashMap<String, Arc<dyn EvaluationFunction<S>>>,
}

impl<S> EvaluationRegistry<S> {
    /// Creates an empty registry
    pub fn new() -> Self {
        EvaluationRegistry {
            functions: HashMap::new(),
        }
    }

    /// Registers `function` under `name`, replacing any previous entry
    pub fn register<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: EvaluationFunction<S> + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    /// Looks up the function registered under `name`
    pub fn get(&self, name: &str) -> Result<Arc<dyn EvaluationFunction<S>>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| SearchError::UnknownEvaluation(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<S: GameState> EvaluationRegistry<S> {
    /// Registry holding the default `"score"` evaluation
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_EVALUATION, ScoreEvaluation);
        registry
    }
}

impl<S: SpatialState> EvaluationRegistry<S> {
    /// Registry holding `"score"` plus `"proximity"` (alias `"better"`)
    pub fn spatial() -> Self {
        let mut registry = Self::standard();
        registry
            .register("proximity", ProximityEvaluation::default())
            .register("better", ProximityEvaluation::default());
        registry
    }
}

impl<S> Default for EvaluationRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for EvaluationRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationRegistry")
            .field("names", &self.names())
            .finish()
    }
}
