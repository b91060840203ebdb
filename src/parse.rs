use std::str::FromStr;

use crate::{Cell, Maze, MazeError, Tile};

pub const WALL: char = '#';
pub const START: char = 'A';
pub const GOAL: char = 'B';

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_wall(s, WALL)
    }
}

impl Maze {
    /// Parses a maze where `wall` marks blocked cells and every other
    /// character except `A` and `B` is floor. Short rows are padded with floor.
    pub fn parse_with_wall(s: &str, wall: char) -> Result<Self, MazeError> {
        let lines = s.lines().collect::<Vec<_>>();
        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut grid = vec![Tile::Floor; height * width];
        let mut starts = Vec::new();
        let mut goals = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            for (j, ch) in line.chars().enumerate() {
                match ch {
                    START => starts.push(Cell(i, j)),
                    GOAL => goals.push(Cell(i, j)),
                    _ if ch == wall => grid[i * width + j] = Tile::Wall,
                    _ => {}
                }
            }
        }

        let start = match *starts {
            [start] => start,
            [] => return Err(MazeError::MissingStart),
            _ => return Err(MazeError::MultipleStarts(starts.len())),
        };
        let goal = match *goals {
            [goal] => goal,
            [] => return Err(MazeError::MissingGoal),
            _ => return Err(MazeError::MultipleGoals(goals.len())),
        };

        Ok(Maze {
            height,
            width,
            grid: grid.into(),
            start,
            goal,
            wall,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_counts() {
        assert_eq!("#B#".parse::<Maze>(), Err(MazeError::MissingStart));
        assert_eq!("A B A".parse::<Maze>(), Err(MazeError::MultipleStarts(2)));
        assert_eq!("A".parse::<Maze>(), Err(MazeError::MissingGoal));
        assert_eq!("AB\nBB".parse::<Maze>(), Err(MazeError::MultipleGoals(3)));
        assert_eq!("".parse::<Maze>(), Err(MazeError::MissingStart));
    }

    #[test]
    fn custom_wall() {
        let maze = Maze::parse_with_wall("A%#\n%%B", '%').unwrap();
        assert!(maze.is_wall(Cell(0, 1)));
        assert!(!maze.is_wall(Cell(0, 2)));
        assert!(maze.is_wall(Cell(1, 0)));
        assert_eq!(maze.start(), Cell(0, 0));
        assert_eq!(maze.goal(), Cell(1, 2));
        assert_eq!(maze.wall(), '%');
    }

    #[test]
    fn crlf_lines() {
        let maze = "###\r\n#AB\r\n###\r\n".parse::<Maze>().unwrap();
        assert_eq!((maze.height(), maze.width()), (3, 3));
    }
}
