//! Append-only search tree. Parents are referenced by index, so the tree is
//! dropped as a whole once the path has been read back.

use crate::{Cell, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub state: Cell,
    pub parent: Option<NodeId>,
    /// The move from `parent` to `state`. `None` only for the root.
    pub action: Option<Direction>,
    pub cost: usize,
}

#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn with_root(state: Cell) -> (Self, NodeId) {
        let mut tree = Self::default();
        let root = tree.push(Node {
            state,
            parent: None,
            action: None,
            cost: 0,
        });
        (tree, root)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Adds a node one step past `parent`.
    pub fn child(&mut self, parent: NodeId, action: Direction, state: Cell) -> NodeId {
        let cost = self[parent].cost + 1;
        self.push(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            cost,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Moves and cells from the root to `id`, excluding the root cell.
    pub fn path(&self, id: NodeId) -> (Vec<Direction>, Vec<Cell>) {
        let (mut actions, mut cells): (Vec<_>, Vec<_>) =
            std::iter::successors(Some(&self[id]), |node| node.parent.map(|p| &self[p]))
                .filter_map(|node| Some((node.action?, node.state)))
                .unzip();
        actions.reverse();
        cells.reverse();
        (actions, cells)
    }
}

impl std::ops::Index<NodeId> for SearchTree {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
