//! Search nodes and the arena that owns them.
//!
//! Every node created by a search lives in a [`NodeArena`] and refers to its
//! predecessor by [`NodeId`]. The parent links form a tree rooted at the
//! initial board, which makes path reconstruction a walk over indices.

use std::ops::Index;

use crate::board::{Action, Board};

/// Handle of a node inside its arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board together with how the search reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub state: Board,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    /// Move of the blank that produced `state` from the parent's board.
    pub action: Option<Action>,
    /// Moves from the initial board (g-value).
    pub cost: u32,
}

/// One entry of a reconstructed solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub state: Board,
    pub action: Option<Action>,
}

/// Append-only storage for the nodes of a single search.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root node with cost 0.
    pub fn root(&mut self, state: Board) -> NodeId {
        self.push(Node {
            state,
            parent: None,
            action: None,
            cost: 0,
        })
    }

    /// Adds a child of `parent` one move further from the root.
    pub fn child(&mut self, parent: NodeId, action: Action, state: Board) -> NodeId {
        let cost = self[parent].cost + 1;
        self.push(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            cost,
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Number of nodes ever created in this arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Walks parent links from `terminal` back to the root.
    ///
    /// The result runs start-to-terminal, has `cost + 1` entries, and only
    /// the first entry has no action.
    pub fn reconstruct_path(&self, terminal: NodeId) -> Vec<Step> {
        let mut path = Vec::with_capacity(self[terminal].cost as usize + 1);
        let mut current = Some(terminal);
        while let Some(id) = current {
            let node = &self[id];
            path.push(Step {
                state: node.state,
                action: node.action,
            });
            current = node.parent;
        }
        path.reverse();
        path
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
