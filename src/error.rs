use thiserror::Error;

/// The maze text does not have exactly one start and one goal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Maze must have a start (A)")]
    MissingStart,
    #[error("Maze must have exactly one start (A), found {0}")]
    MultipleStarts(usize),
    #[error("Maze must have a goal (B)")]
    MissingGoal,
    #[error("Maze must have exactly one goal (B), found {0}")]
    MultipleGoals(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown algorithm: {0:?}, expecting one of dfs, bfs, greedy, astar")]
pub struct UnknownStrategy(pub String);

/// `remove_next` was called on an empty frontier.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Empty frontier")]
pub struct EmptyFrontier;
