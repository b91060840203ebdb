use std::fmt::{self, Display};

use console::{style, Color};

use crate::parse::{GOAL, START};
use crate::{Cell, Direction, Maze, Search, Solution, Strategy, Tile};

const PATH: char = '*';
const EXPLORED: char = '.';
const FLOOR: char = ' ';

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dir, i) in self.actions.iter().zip(0..) {
            if i != 0 {
                " ".fmt(f)?;
            }
            dir.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendering::new(self).fmt(f)
    }
}

/// Text picture of a maze with an optional path and explored set on top.
///
/// Walls keep the character they were parsed from, start and goal are `A`
/// and `B`, the path `*`, explored cells `.`, and floor a space. Unless the
/// wall character is one of those glyphs, the output parsed with the same
/// wall character gives back the same maze.
#[derive(Debug, Clone, Copy)]
pub struct Rendering<'a> {
    maze: &'a Maze,
    search: Option<&'a Search>,
    show_explored: bool,
    colored: bool,
}

impl<'a> Rendering<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            maze,
            search: None,
            show_explored: false,
            colored: false,
        }
    }

    pub fn search(mut self, search: &'a Search) -> Self {
        self.search = Some(search);
        self
    }

    pub fn show_explored(mut self, show: bool) -> Self {
        self.show_explored = show;
        self
    }

    /// Use terminal colours. They are still dropped when `console` decides
    /// the output cannot take them.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn glyph(&self, pos: Cell, tile: Tile) -> (char, Color) {
        let on_path = || {
            self.search
                .and_then(Search::path)
                .map_or(false, |path| path.contains(&pos))
        };
        let explored = || {
            self.show_explored
                && self
                    .search
                    .map_or(false, |search| search.explored.contains(&pos))
        };
        if tile == Tile::Wall {
            (self.maze.wall(), Color::Black)
        } else if self.maze.is_start(pos) {
            (START, Color::Red)
        } else if self.maze.is_goal(pos) {
            (GOAL, Color::Green)
        } else if on_path() {
            (PATH, Color::Yellow)
        } else if explored() {
            (EXPLORED, Color::Magenta)
        } else {
            (FLOOR, Color::White)
        }
    }
}

impl fmt::Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, tile) in self.maze.cells() {
            if pos.1 == 0 && pos.0 != 0 {
                "\n".fmt(f)?;
            }
            let (ch, color) = self.glyph(pos, tile);
            if self.colored {
                let styled = style(ch).fg(color);
                let styled = if tile == Tile::Wall {
                    styled.dim()
                } else {
                    styled.bold()
                };
                styled.fmt(f)?;
            } else {
                ch.fmt(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve;

    const MAZE: &str = "\
#######
#A  # #
# #   #
#   #B#
#######";

    #[test]
    fn plain_maze_round_trips() {
        let maze = MAZE.parse::<Maze>().unwrap();
        assert_eq!(maze.to_string(), MAZE);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let maze = "###\n#AB\n#".parse::<Maze>().unwrap();
        assert_eq!(maze.to_string(), "###\n#AB\n#  ");
    }

    #[test]
    fn path_and_explored_overlay() {
        let maze = MAZE.parse::<Maze>().unwrap();
        let search = solve(&maze, Strategy::BreadthFirst);
        let solution = search.solution.as_ref().unwrap();
        assert_eq!(solution.to_string(), "right right down right right down");
        assert_eq!(solution.len(), 6);

        let got = Rendering::new(&maze).search(&search).to_string();
        assert_eq!(
            got,
            "\
#######
#A**# #
# #***#
#   #B#
#######"
        );
        assert_eq!(got.parse::<Maze>().unwrap(), maze);

        let got = Rendering::new(&maze)
            .search(&search)
            .show_explored(true)
            .to_string();
        assert_eq!(
            got,
            "\
#######
#A**#.#
#.#***#
#...#B#
#######"
        );
    }

    #[test]
    fn cell_display() {
        assert_eq!(Cell(3, 12).to_string(), "(3, 12)");
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Strategy::AStar.to_string(), "astar");
    }

    #[test]
    fn custom_wall_round_trips() {
        let text = "%%%%%\n%A x%\n%% B%\n%%%%%";
        let maze = Maze::parse_with_wall(text, '%').unwrap();
        assert_eq!(maze.to_string(), "%%%%%\n%A  %\n%% B%\n%%%%%");

        let search = solve(&maze, Strategy::AStar);
        let got = Rendering::new(&maze).search(&search).to_string();
        assert_eq!(got, "%%%%%\n%A* %\n%%*B%\n%%%%%");
        assert_eq!(Maze::parse_with_wall(&got, '%').unwrap(), maze);
    }
}
