use std::ops::Index;

use arrayvec::ArrayVec;

mod error;
mod fmt;
pub mod frontier;
pub mod heuristic;
pub mod node;
mod parse;
pub mod solve;

pub use error::{EmptyFrontier, MazeError, UnknownStrategy};
pub use fmt::Rendering;
pub use solve::{solve, solve_named, solve_with, Search, Solution, Strategy};

/// A grid position as `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(pub usize, pub usize);

impl Cell {
    fn step(self, dir: Direction) -> Option<Self> {
        const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let (dx, dy) = DIRECTIONS[dir as usize];
        Some(Cell(
            self.0.checked_add_signed(dx)?,
            self.1.checked_add_signed(dy)?,
        ))
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

/// Moves in the order neighbors are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// An immutable maze with exactly one start and one goal.
///
/// Cells are stored row-major in `grid`. Start and goal are always floor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maze {
    height: usize,
    width: usize,
    grid: Box<[Tile]>,
    start: Cell,
    goal: Cell,
    wall: char,
}

impl Index<Cell> for Maze {
    type Output = Tile;
    fn index(&self, pos: Cell) -> &Self::Output {
        debug_assert!(self.contains(pos), "{pos:?} is outside the maze");
        &self.grid[pos.0 * self.width + pos.1]
    }
}

impl Maze {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// The character walls were parsed from.
    pub fn wall(&self) -> char {
        self.wall
    }

    pub fn contains(&self, pos: Cell) -> bool {
        pos.0 < self.height && pos.1 < self.width
    }

    /// Out-of-bounds cells are not walls.
    pub fn is_wall(&self, pos: Cell) -> bool {
        self.contains(pos) && self[pos] == Tile::Wall
    }

    pub fn is_start(&self, pos: Cell) -> bool {
        pos == self.start
    }

    pub fn is_goal(&self, pos: Cell) -> bool {
        pos == self.goal
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        let width = self.width;
        self.grid
            .iter()
            .enumerate()
            .map(move |(idx, &tile)| (Cell(idx / width, idx % width), tile))
    }

    /// Open cells one step away, in `Direction::ALL` order.
    pub fn neighbors(&self, pos: Cell) -> ArrayVec<(Direction, Cell), 4> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let next = pos.step(dir)?;
                (self.contains(next) && self[next] == Tile::Floor).then_some((dir, next))
            })
            .collect()
    }
}
