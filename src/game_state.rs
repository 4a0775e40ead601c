//! Traits defining the game state contract consumed by the search engines.
//!
//! The [`GameState`] trait is the only view the engines have of a game. The
//! engines never look inside a state; they ask whether it is over, how many
//! agents take part, what each agent may do, and what state follows a move.

use std::fmt::Debug;

/// Index of the maximizing agent whose move is being chosen
pub const PROTAGONIST: usize = 0;

/// Trait for actions that can be taken in a game
///
/// Actions are opaque tokens. The engines only clone them, hand them back to
/// [`GameState::successor`], and return one of them as the chosen move.
pub trait Action: Clone + Debug + PartialEq + Send + Sync {}

impl Action for usize {}
impl Action for u8 {}
impl Action for i32 {}
impl Action for char {}
impl Action for &'static str {}
impl Action for String {}

/// Trait defining the state interface required by the adversarial engines
///
/// Agent `0` is the protagonist; agents `1..num_agents()` are adversaries and
/// move in index order after the protagonist, one move each per round.
pub trait GameState: Clone + Send + Sync {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// Returns true if the protagonist has won in this state
    fn is_win(&self) -> bool;

    /// Returns true if the protagonist has lost in this state
    fn is_lose(&self) -> bool;

    /// Returns true if the game is over
    ///
    /// Terminal states are evaluated immediately, whatever depth remains.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Returns the number of agents, protagonist included (always at least 1)
    fn num_agents(&self) -> usize;

    /// Returns the legal actions of `agent` in this state
    ///
    /// Must be non-empty for every agent of a non-terminal state. The order is
    /// significant only as the enumeration order used when breaking ties.
    ///
    /// # Example
    ///
    /// ```
    /// # use adversarial_search::GameState;
    /// # #[derive(Clone)]
    /// # struct Corridor { position: i32 }
    /// # impl GameState for Corridor {
    /// # type Action = &'static str;
    /// # fn is_win(&self) -> bool { self.position >= 3 }
    /// # fn is_lose(&self) -> bool { self.position <= -3 }
    /// # fn num_agents(&self) -> usize { 1 }
    /// fn legal_actions(&self, _agent: usize) -> Vec<&'static str> {
    ///     vec!["left", "right"]
    /// }
    /// # fn successor(&self, _agent: usize, action: &&'static str) -> Self {
    /// #     let step = if *action == "left" { -1 } else { 1 };
    /// #     Corridor { position: self.position + step }
    /// # }
    /// # fn score(&self) -> f64 { self.position as f64 }
    /// # }
    /// ```
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// Returns the state that follows `agent` taking `action`
    ///
    /// This must not modify `self`; the engines explore many successors of
    /// the same state.
    fn successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Returns the intrinsic score of this state
    fn score(&self) -> f64;
}

/// A position on an integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }

    /// Number of orthogonal grid steps between two positions
    pub fn manhattan_distance(&self, other: &Coord) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Coord { x, y }
    }
}

/// States whose agents occupy positions on a grid
///
/// Only distance-aware evaluation functions need this; the engines
/// themselves work with any [`GameState`].
pub trait SpatialState: GameState {
    /// Returns the position of `agent`
    fn position_of(&self, agent: usize) -> Coord;
}
