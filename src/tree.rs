//! Explicit game trees
//!
//! [`GameTree`] is a ready-made [`GameState`] over a hand-built tree of
//! [`TreeNode`]s. It is useful for checking engine behavior against values
//! worked out by hand, and for benchmarking on trees of known shape.

use std::fmt;
use std::sync::Arc;

use crate::game_state::GameState;

/// A node in an explicit game tree
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// A terminal outcome with its value for the protagonist
    Leaf(f64),

    /// A position where the agent to move picks one of `children`
    Branch {
        /// Static value seen by an evaluation function at a depth cutoff
        estimate: f64,
        children: Vec<Arc<TreeNode>>,
    },
}

impl TreeNode {
    /// Creates a terminal node
    pub fn leaf(value: f64) -> Self {
        TreeNode::Leaf(value)
    }

    /// Creates a branch with a zero estimate
    pub fn branch(children: Vec<TreeNode>) -> Self {
        Self::branch_with_estimate(0.0, children)
    }

    /// Creates a branch with the given static estimate
    pub fn branch_with_estimate(estimate: f64, children: Vec<TreeNode>) -> Self {
        TreeNode::Branch {
            estimate,
            children: children.into_iter().map(Arc::new).collect(),
        }
    }

    /// Creates a branch whose children are all leaves
    pub fn leaves(values: &[f64]) -> Self {
        Self::branch(values.iter().copied().map(TreeNode::Leaf).collect())
    }

    /// Creates a complete tree of the given height and branching factor
    ///
    /// Leaf values are produced by `value` from each leaf's position in
    /// left-to-right order.
    pub fn uniform(height: usize, branching: usize, value: &mut impl FnMut(usize) -> f64) -> Self {
        let mut next_leaf = 0;
        Self::build_uniform(height, branching, value, &mut next_leaf)
    }

    fn build_uniform(
        height: usize,
        branching: usize,
        value: &mut impl FnMut(usize) -> f64,
        next_leaf: &mut usize,
    ) -> Self {
        if height == 0 {
            let leaf = TreeNode::Leaf(value(*next_leaf));
            *next_leaf += 1;
            return leaf;
        }

        let mut children = Vec::with_capacity(branching);
        for _ in 0..branching {
            children.push(Self::build_uniform(height - 1, branching, &mut *value, &mut *next_leaf));
        }
        Self::branch(children)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Number of leaves below (and including) this node
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Branch { children, .. } => children.iter().map(|c| c.leaf_count()).sum(),
        }
    }

    /// Length of the longest path from this node to a leaf
    pub fn height(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Branch { children, .. } => {
                1 + children.iter().map(|c| c.height()).max().unwrap_or(0)
            }
        }
    }
}

/// A position in an explicit game tree
///
/// The agent to move at tree depth `d` is `d % num_agents`, so the root is
/// the protagonist's turn and the adversaries follow in index order.
#[derive(Clone)]
pub struct GameTree {
    node: Arc<TreeNode>,
    num_agents: usize,
    path: Vec<usize>,
}

impl GameTree {
    /// Creates a game over `root` played by `num_agents` agents
    ///
    /// # Panics
    ///
    /// Panics if `num_agents` is zero.
    pub fn new(root: TreeNode, num_agents: usize) -> Self {
        assert!(num_agents >= 1, "a game needs at least one agent");
        GameTree {
            node: Arc::new(root),
            num_agents,
            path: Vec::new(),
        }
    }

    /// The node at the current position
    pub fn node(&self) -> &TreeNode {
        &self.node
    }

    /// Child indices followed from the root to reach this position
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The agent whose turn it is at this position
    pub fn agent_to_move(&self) -> usize {
        self.path.len() % self.num_agents
    }

    /// The leaf value or branch estimate at this position
    pub fn estimate(&self) -> f64 {
        match self.node.as_ref() {
            TreeNode::Leaf(value) => *value,
            TreeNode::Branch { estimate, .. } => *estimate,
        }
    }
}

impl GameState for GameTree {
    type Action = usize;

    fn is_win(&self) -> bool {
        matches!(self.node.as_ref(), TreeNode::Leaf(value) if *value >= 0.0)
    }

    fn is_lose(&self) -> bool {
        matches!(self.node.as_ref(), TreeNode::Leaf(value) if *value < 0.0)
    }

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, agent: usize) -> Vec<usize> {
        match self.node.as_ref() {
            TreeNode::Branch { children, .. } if agent == self.agent_to_move() => {
                (0..children.len()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Moves to child `action` of the current branch
    ///
    /// # Panics
    ///
    /// Panics if the current node is a leaf or `action` is not one of the
    /// indices returned by [`legal_actions`](GameState::legal_actions).
    fn successor(&self, _agent: usize, action: &usize) -> Self {
        let child = match self.node.as_ref() {
            TreeNode::Branch { children, .. } => Arc::clone(&children[*action]),
            TreeNode::Leaf(_) => panic!("no successor of a leaf in a game tree"),
        };

        let mut path = self.path.clone();
        path.push(*action);

        GameTree {
            node: child,
            num_agents: self.num_agents,
            path,
        }
    }

    fn score(&self) -> f64 {
        self.estimate()
    }
}

impl fmt::Debug for GameTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameTree")
            .field("path", &self.path)
            .field("agent_to_move", &self.agent_to_move())
            .field("estimate", &self.estimate())
            .finish()
    }
}
