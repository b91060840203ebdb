//! Exploration orders for the search loop.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use fxhash::FxHashMap;

use crate::heuristic::manhattan;
use crate::node::{Node, NodeId};
use crate::{Cell, EmptyFrontier};

pub trait Frontier {
    fn add(&mut self, id: NodeId, node: &Node);
    fn is_empty(&self) -> bool;
    fn remove_next(&mut self) -> Result<NodeId, EmptyFrontier>;

    /// Whether a child reaching `state` is left out. Frontiers that let the
    /// first removed copy of a state win keep every child.
    fn skips(&self, _state: Cell) -> bool {
        false
    }
}

/// Multiset of states currently in a list frontier.
#[derive(Debug, Default)]
struct Resident(FxHashMap<Cell, usize>);

impl Resident {
    fn insert(&mut self, state: Cell) {
        *self.0.entry(state).or_default() += 1;
    }

    fn remove(&mut self, state: Cell) {
        if let Some(cnt) = self.0.get_mut(&state) {
            *cnt -= 1;
            if *cnt == 0 {
                self.0.remove(&state);
            }
        }
    }

    fn contains(&self, state: Cell) -> bool {
        self.0.contains_key(&state)
    }
}

/// LIFO, for depth-first search.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<(NodeId, Cell)>,
    resident: Resident,
}

impl StackFrontier {
    pub fn contains_state(&self, state: Cell) -> bool {
        self.resident.contains(state)
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, id: NodeId, node: &Node) {
        self.nodes.push((id, node.state));
        self.resident.insert(node.state);
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn remove_next(&mut self) -> Result<NodeId, EmptyFrontier> {
        let (id, state) = self.nodes.pop().ok_or(EmptyFrontier)?;
        self.resident.remove(state);
        Ok(id)
    }

    fn skips(&self, state: Cell) -> bool {
        self.contains_state(state)
    }
}

/// FIFO, for breadth-first search.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<(NodeId, Cell)>,
    resident: Resident,
}

impl QueueFrontier {
    pub fn contains_state(&self, state: Cell) -> bool {
        self.resident.contains(state)
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, id: NodeId, node: &Node) {
        self.nodes.push_back((id, node.state));
        self.resident.insert(node.state);
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn remove_next(&mut self) -> Result<NodeId, EmptyFrontier> {
        let (id, state) = self.nodes.pop_front().ok_or(EmptyFrontier)?;
        self.resident.remove(state);
        Ok(id)
    }

    fn skips(&self, state: Cell) -> bool {
        self.contains_state(state)
    }
}

/// How a `PriorityFrontier` ranks a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Distance to the goal only.
    Greedy,
    /// Path cost so far plus distance to the goal.
    AStar,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Queued {
    key: usize,
    // Insertion order. Unique, so it settles every tie on `key`.
    seq: u64,
    id: NodeId,
}

/// Smallest key first, earliest insertion among equal keys.
#[derive(Debug)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Queued>>,
    goal: Cell,
    priority: Priority,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new(priority: Priority, goal: Cell) -> Self {
        Self {
            heap: BinaryHeap::new(),
            goal,
            priority,
            next_seq: 0,
        }
    }

    pub fn key(&self, node: &Node) -> usize {
        let h = manhattan(node.state, self.goal);
        match self.priority {
            Priority::Greedy => h,
            Priority::AStar => node.cost + h,
        }
    }
}

impl Frontier for PriorityFrontier {
    fn add(&mut self, id: NodeId, node: &Node) {
        let key = self.key(node);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Queued {
            key,
            seq,
            id,
        }));
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn remove_next(&mut self) -> Result<NodeId, EmptyFrontier> {
        let Reverse(queued) = self.heap.pop().ok_or(EmptyFrontier)?;
        Ok(queued.id)
    }
}
