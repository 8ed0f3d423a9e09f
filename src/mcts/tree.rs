//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. Dropping the
//! tree frees every node at once.

use super::node::{MCTSNode, NodeId};
use crate::core::{PlayerId, PlayerMap};
use crate::rules::SearchState;

/// Arena-based MCTS tree.
#[derive(Clone, Debug)]
pub struct MCTSTree<S: SearchState> {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S: SearchState> MCTSTree<S> {
    /// Create a new tree rooted at `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode<S> {
        self.get(self.root)
    }

    /// Add a child of `parent` reached by `action`, returning its ID.
    pub fn add_child(&mut self, parent: NodeId, action: S::Action, state: S) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(MCTSNode::new(parent, Some(action), state, depth));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Add one visit and `values` to `leaf` and every ancestor.
    pub fn backpropagate(&mut self, leaf: NodeId, values: &PlayerMap<f64>) {
        let mut current = leaf;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            for (player, value) in values.iter() {
                node.total_value[player] += *value;
            }
            current = node.parent;
        }
    }

    /// The most visited child of `node`.
    #[must_use]
    pub fn most_visited_child(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)
            .children
            .iter()
            .copied()
            .max_by_key(|&c| self.get(c).visits)
    }

    /// Visits per expanded root action.
    pub fn root_visits(&self) -> Vec<(S::Action, u32)> {
        self.root_node()
            .children
            .iter()
            .filter_map(|&c| {
                let child = self.get(c);
                child.action.clone().map(|a| (a, child.visits))
            })
            .collect()
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            terminal_count: self.nodes.iter().filter(|n| n.is_terminal()).count(),
            total_children: self.nodes.iter().map(|n| n.children.len()).sum(),
        }
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Player to move at the root.
    #[must_use]
    pub fn root_player(&self) -> PlayerId {
        self.root_node().to_move
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Total number of parent-child links.
    pub total_children: usize,
}

impl TreeStats {
    /// Average children per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.node_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::Nim;

    fn child_of(tree: &MCTSTree<Nim>, parent: NodeId, take: u32) -> Nim {
        let mut state = tree.get(parent).state.clone();
        state.apply_action(&take);
        state
    }

    #[test]
    fn test_tree_new() {
        let tree = MCTSTree::new(Nim::new(5));

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert_eq!(tree.root_player(), PlayerId::new(0));
    }

    #[test]
    fn test_add_child() {
        let mut tree = MCTSTree::new(Nim::new(5));
        let root = tree.root();

        let state = child_of(&tree, root, 2);
        let child_id = tree.add_child(root, 2, state);

        assert_eq!(child_id, NodeId::new(1));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(child_id).depth, 1);
        assert_eq!(tree.get(child_id).parent, root);
        assert_eq!(tree.get(child_id).state.stones, 3);
        assert_eq!(tree.get(child_id).to_move, PlayerId::new(1));
        assert_eq!(tree.root_node().children, vec![child_id]);
        // The parent's state is untouched.
        assert_eq!(tree.root_node().state.stones, 5);
    }

    #[test]
    fn test_backpropagate_updates_path() {
        let mut tree = MCTSTree::new(Nim::new(5));
        let root = tree.root();
        let a_state = child_of(&tree, root, 1);
        let a = tree.add_child(root, 1, a_state);
        let b_state = child_of(&tree, a, 1);
        let b = tree.add_child(a, 1, b_state);
        let other_state = child_of(&tree, root, 3);
        let other = tree.add_child(root, 3, other_state);

        let values = PlayerMap::new(2, |p| if p.index() == 0 { 1.0 } else { 0.0 });
        tree.backpropagate(b, &values);
        tree.backpropagate(b, &values);

        for id in [root, a, b] {
            assert_eq!(tree.get(id).visits, 2);
            assert_eq!(tree.get(id).total_value[PlayerId::new(0)], 2.0);
            assert_eq!(tree.get(id).total_value[PlayerId::new(1)], 0.0);
        }
        assert_eq!(tree.get(other).visits, 0);
        assert_eq!(tree.most_visited_child(root), Some(a));
        assert_eq!(tree.root_visits(), vec![(1, 2), (3, 0)]);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = MCTSTree::new(Nim::new(2));
        let root = tree.root();
        let s1 = child_of(&tree, root, 1);
        tree.add_child(root, 1, s1);
        let s2 = child_of(&tree, root, 2);
        tree.add_child(root, 2, s2);

        let stats = tree.stats();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.max_depth, 1);
        assert_eq!(stats.terminal_count, 1);
        assert_eq!(stats.total_children, 2);
        assert!((stats.branching_factor() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_tree_iter() {
        let mut tree = MCTSTree::new(Nim::new(3));
        let state = child_of(&tree, tree.root(), 1);
        tree.add_child(NodeId::new(0), 1, state);

        let nodes: Vec<_> = tree.iter().map(|(id, _)| id).collect();
        assert_eq!(nodes, vec![NodeId::new(0), NodeId::new(1)]);
    }
}
