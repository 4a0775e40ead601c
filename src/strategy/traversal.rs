//! The recursive walk shared by every engine
//!
//! A [`Traversal`] values states by alternating a max node for the
//! protagonist with one adversary node per remaining agent. Which kind of
//! adversary node is used is chosen by an [`Aggregation`].

use std::time::Instant;

use log::trace;

use crate::{
    config::SearchConfig,
    game_state::{GameState, PROTAGONIST},
    stats::SearchStatistics,
    utils::checked_value,
    Result, SearchError,
};

/// How adversary levels combine the values of their children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Adversaries pick the minimum
    Minimize,

    /// Adversaries pick the minimum, and both node kinds return early once
    /// the alpha/beta window shows the rest of their children cannot matter
    Prune,

    /// Adversaries pick uniformly at random, so their value is the mean
    Expectation,
}

/// Alpha-beta bounds passed down the recursion
///
/// `alpha` is the value the protagonist can already guarantee and `beta`
/// the value the adversaries can already hold it to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub alpha: f64,
    pub beta: f64,
}

impl Window {
    /// The window that never prunes
    pub const UNBOUNDED: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };
}

/// One search over a game tree
pub struct Traversal<'a, S> {
    config: &'a SearchConfig<S>,
    aggregation: Aggregation,
    stats: &'a mut SearchStatistics,
    started: Instant,
}

impl<'a, S: GameState> Traversal<'a, S> {
    /// Starts a traversal, resetting `stats`
    pub fn new(
        config: &'a SearchConfig<S>,
        aggregation: Aggregation,
        stats: &'a mut SearchStatistics,
    ) -> Self {
        *stats = SearchStatistics::new();
        Traversal {
            config,
            aggregation,
            stats,
            started: Instant::now(),
        }
    }

    /// Validates the root and returns the protagonist's actions
    pub fn root_actions(&self, state: &S) -> Result<Vec<S::Action>> {
        if state.is_terminal() {
            return Err(SearchError::TerminalState);
        }
        Self::legal_actions(state, PROTAGONIST)
    }

    /// Value of the protagonist playing `action` from the root
    pub fn action_value(&mut self, root: &S, action: &S::Action, window: Window) -> Result<f64> {
        let child = self.expand(root, PROTAGONIST, action, 0);
        let value = self.after_move(&child, PROTAGONIST, 0, window)?;
        trace!("root action {:?} valued at {}", action, value);
        Ok(value)
    }

    /// Value of `state` as a protagonist node at the first round
    pub fn root_value(&mut self, state: &S) -> Result<f64> {
        self.max_value(state, 0, Window::UNBOUNDED)
    }

    /// Records the elapsed time and ends the traversal
    pub fn finish(self) {
        self.stats.total_time = self.started.elapsed();
    }

    fn legal_actions(state: &S, agent: usize) -> Result<Vec<S::Action>> {
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions { agent });
        }
        Ok(actions)
    }

    fn evaluate(&mut self, state: &S) -> Result<f64> {
        self.stats.evaluations += 1;
        checked_value(self.config.evaluate(state))
    }

    fn expand(&mut self, state: &S, agent: usize, action: &S::Action, round: usize) -> S {
        let ply = round * state.num_agents() + agent + 1;
        self.stats.nodes_expanded += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);
        state.successor(agent, action)
    }

    /// Values `state`, reached by `agent` moving during `round`
    fn after_move(&mut self, state: &S, agent: usize, round: usize, window: Window) -> Result<f64> {
        let next = agent + 1;
        if next >= state.num_agents() {
            self.max_value(state, round + 1, window)
        } else {
            self.adversary_value(state, next, round, window)
        }
    }

    fn max_value(&mut self, state: &S, round: usize, window: Window) -> Result<f64> {
        if state.is_terminal() || round >= self.config.depth {
            return self.evaluate(state);
        }

        let Window { mut alpha, beta } = window;
        let mut v = f64::NEG_INFINITY;

        for action in Self::legal_actions(state, PROTAGONIST)? {
            let child = self.expand(state, PROTAGONIST, &action, round);
            v = v.max(self.after_move(&child, PROTAGONIST, round, Window { alpha, beta })?);

            if self.aggregation == Aggregation::Prune {
                if v > beta {
                    self.stats.cutoffs += 1;
                    return Ok(v);
                }
                alpha = alpha.max(v);
            }
        }

        Ok(v)
    }

    fn adversary_value(&mut self, state: &S, agent: usize, round: usize, window: Window) -> Result<f64> {
        if state.is_terminal() {
            return self.evaluate(state);
        }

        let actions = Self::legal_actions(state, agent)?;

        match self.aggregation {
            Aggregation::Minimize | Aggregation::Prune => {
                let Window { alpha, mut beta } = window;
                let mut v = f64::INFINITY;

                for action in actions {
                    let child = self.expand(state, agent, &action, round);
                    v = v.min(self.after_move(&child, agent, round, Window { alpha, beta })?);

                    if self.aggregation == Aggregation::Prune {
                        if v < alpha {
                            self.stats.cutoffs += 1;
                            return Ok(v);
                        }
                        beta = beta.min(v);
                    }
                }

                Ok(v)
            }
            Aggregation::Expectation => {
                let p = 1.0 / actions.len() as f64;
                let mut v = 0.0;

                for action in actions {
                    let child = self.expand(state, agent, &action, round);
                    v += p * self.after_move(&child, agent, round, Window::UNBOUNDED)?;
                }

                checked_value(v)
            }
        }
    }
}
