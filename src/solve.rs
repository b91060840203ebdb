use std::str::FromStr;

use log::{debug, trace};

use crate::frontier::{Frontier, Priority, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::node::SearchTree;
use crate::{Cell, Direction, Maze, UnknownStrategy};

pub type IndexSet<K> = indexmap::IndexSet<K, fxhash::FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    Greedy,
    AStar,
}

impl Strategy {
    pub const ALL: [Self; 4] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::Greedy,
        Self::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
        }
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

/// Moves from start to goal and the cells they land on. The start cell is
/// not included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    pub actions: Vec<Direction>,
    pub cells: Vec<Cell>,
}

impl Solution {
    /// Number of steps, which is also the path cost.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub strategy: Strategy,
    /// `None` if the goal is unreachable.
    pub solution: Option<Solution>,
    /// Expanded states, in expansion order.
    pub explored: IndexSet<Cell>,
    /// Nodes taken off the frontier and processed, including the goal.
    pub num_explored: usize,
}

impl Search {
    pub fn path(&self) -> Option<&[Cell]> {
        self.solution.as_ref().map(|solution| &solution.cells[..])
    }
}

pub fn solve(maze: &Maze, strategy: Strategy) -> Search {
    solve_with(maze, strategy, || {})
}

/// Like `solve`, calling `on_step` once per processed node.
pub fn solve_with(maze: &Maze, strategy: Strategy, on_step: impl FnMut()) -> Search {
    let goal = maze.goal();
    let search = match strategy {
        Strategy::DepthFirst => search(maze, strategy, &mut StackFrontier::default(), on_step),
        Strategy::BreadthFirst => search(maze, strategy, &mut QueueFrontier::default(), on_step),
        Strategy::Greedy => {
            let mut frontier = PriorityFrontier::new(Priority::Greedy, goal);
            search(maze, strategy, &mut frontier, on_step)
        }
        Strategy::AStar => {
            let mut frontier = PriorityFrontier::new(Priority::AStar, goal);
            search(maze, strategy, &mut frontier, on_step)
        }
    };
    match &search.solution {
        Some(solution) => debug!(
            "{}: {} steps, {} explored",
            strategy.name(),
            solution.len(),
            search.num_explored,
        ),
        None => debug!(
            "{}: no solution, {} explored",
            strategy.name(),
            search.num_explored,
        ),
    }
    search
}

/// Resolves `name` before doing any search work.
pub fn solve_named(maze: &Maze, name: &str) -> Result<Search, UnknownStrategy> {
    let strategy = name.parse::<Strategy>()?;
    Ok(solve(maze, strategy))
}

fn search<F: Frontier>(
    maze: &Maze,
    strategy: Strategy,
    frontier: &mut F,
    mut on_step: impl FnMut(),
) -> Search {
    let (mut tree, root) = SearchTree::with_root(maze.start());
    frontier.add(root, &tree[root]);

    let mut explored = IndexSet::default();
    let mut num_explored = 0;
    let solution = loop {
        #[cfg(feature = "coz")]
        coz::scope!("Expand");

        // Exhausted.
        if frontier.is_empty() {
            break None;
        }
        let id = frontier.remove_next().expect("Frontier is not empty");
        let node = tree[id];

        // A copy queued before its state was expanded.
        if explored.contains(&node.state) {
            continue;
        }

        on_step();
        num_explored += 1;

        if node.state == maze.goal() {
            let (actions, cells) = tree.path(id);
            break Some(Solution { actions, cells });
        }

        trace!("expand {:?} at cost {}", node.state, node.cost);
        explored.insert(node.state);

        for (dir, next) in maze.neighbors(node.state) {
            if explored.contains(&next) || frontier.skips(next) {
                continue;
            }
            let child = tree.child(id, dir, next);
            frontier.add(child, &tree[child]);
        }
    };
    trace!("search tree grew to {} nodes", tree.len());

    Search {
        strategy,
        solution,
        explored,
        num_explored,
    }
}
