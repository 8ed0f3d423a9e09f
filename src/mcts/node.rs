//! MCTS node structures.
//!
//! Uses arena-based allocation with index references (NodeId). Each node
//! owns a copy of the state it represents; children are reached through
//! indices, never references.

use crate::core::{PlayerId, PlayerMap};
use crate::rules::SearchState;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug)]
pub struct MCTSNode<S: SearchState> {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Action that led here from the parent (None for root).
    pub action: Option<S::Action>,

    /// Game state at this node.
    pub state: S,

    /// Player to move at this node.
    pub to_move: PlayerId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    /// Accumulated terminal values, per player.
    pub total_value: PlayerMap<f64>,

    /// Expanded children.
    pub children: Vec<NodeId>,

    /// Legal actions not yet expanded into children.
    pub untried: Vec<S::Action>,
}

impl<S: SearchState> MCTSNode<S> {
    /// Create a new node for `state`.
    pub fn new(parent: NodeId, action: Option<S::Action>, state: S, depth: u16) -> Self {
        let untried = if state.is_terminal() {
            Vec::new()
        } else {
            state.legal_actions()
        };
        Self {
            parent,
            action,
            to_move: state.current_player(),
            total_value: PlayerMap::with_value(state.player_count(), 0.0),
            state,
            depth,
            visits: 0,
            children: Vec::new(),
            untried,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(NodeId::NONE, None, state, 0)
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Check if every legal action has a child.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Get the mean value for a player.
    #[must_use]
    pub fn mean_value(&self, player: PlayerId) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_value[player] / self.visits as f64
        }
    }
}
