//! Plain-text form of mazes and levels.
//!
//! Mazes are written one row per line with `#` for walls and `.` for open cells. The same form is
//! accepted back through [`FromStr`], which is mostly useful for hand-written test fixtures. Levels
//! additionally mark start, goal, hazards and collectibles.

use std::{fmt, str::FromStr};

use color_eyre::eyre::{bail, ensure, OptionExt as _, Report, Result};

use crate::{
    engine::Level,
    map::Maze,
    types::{Cell, Position},
};

/// Character used for wall cells.
const WALL: char = '#';
/// Character used for open cells.
const PATH: char = '.';
/// Marker for the start cell of a level.
const START: char = 'S';
/// Marker for the goal cell of a level.
const GOAL: char = 'G';
/// Marker for a hazard.
const HAZARD: char = 'X';
/// Marker for a collectible.
const COLLECTIBLE: char = '*';
/// Marker for a cell on an overlaid route.
const ROUTE: char = 'o';

/// Returns the bare glyph of a cell.
const fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Wall => WALL,
        Cell::Path => PATH,
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(formatter)?;
            }
            for cell in row {
                write!(formatter, "{}", glyph(*cell))?;
            }
        }

        Ok(())
    }
}

impl FromStr for Maze {
    type Err = Report;

    /// Parses a maze from its text form.
    ///
    /// Leading and trailing blank space around the whole input is ignored. The grid must be at
    /// least 3x3, every row must have the same length, only `#` and `.` may appear, and the outer
    /// ring must be entirely `#`.
    fn from_str(input: &str) -> Result<Self> {
        let lines: Vec<&str> = input.trim().lines().collect();

        ensure!(lines.len() >= 3, "maze needs at least 3 rows, got {}", lines.len());

        let width = lines
            .first()
            .ok_or_eyre("failed to retrieve first row of maze")?
            .chars()
            .count();
        ensure!(width >= 3, "maze needs at least 3 columns, got {width}");

        let height = lines.len();
        let mut cells = Vec::with_capacity(width * height);

        for (y, line) in lines.iter().enumerate() {
            ensure!(
                line.chars().count() == width,
                "row {y} has {} columns, expected {width}",
                line.chars().count()
            );

            for (x, char) in line.chars().enumerate() {
                let cell = match char {
                    WALL => Cell::Wall,
                    PATH => Cell::Path,
                    other => bail!("unexpected character {other:?} at ({x}, {y})"),
                };
                let on_edge = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                ensure!(
                    !(on_edge && cell.is_path()),
                    "outer ring must be wall, found path at ({x}, {y})"
                );

                cells.push(cell);
            }
        }

        Ok(Self::from_parts(width, height, cells))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&sketch(self, &[]))
    }
}

/// Draws a level with its markers and an optional route.
///
/// Markers win over each other in the order start, goal, hazard, collectible, route.
pub(crate) fn sketch(level: &Level, route: &[Position]) -> String {
    let entities = level.entities();
    let mut out = String::with_capacity((level.maze().width() + 1) * level.maze().height());

    for (position, cell) in level.maze().cells() {
        if position.x == 0 && position.y > 0 {
            out.push('\n');
        }

        let mark = if position == level.start() {
            START
        } else if position == level.goal() {
            GOAL
        } else if entities.hazards.contains(&position) {
            HAZARD
        } else if entities.collectibles.contains(&position) {
            COLLECTIBLE
        } else if route.contains(&position) {
            ROUTE
        } else {
            glyph(cell)
        };
        out.push(mark);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Entities;

    /// Small hand-made maze with a single corridor.
    const CORRIDOR: &str = "\
#######
#.....#
#####.#
#.....#
#######";

    #[test]
    fn test_parse_valid_maze() {
        let maze: Maze = CORRIDOR.parse().expect("fixture should parse");

        assert_eq!(maze.width(), 7);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.path_count(), 11);
        assert!(maze.is_path(Position::new(5, 2)), "the bend should be open");
        assert!(!maze.is_path(Position::new(1, 2)), "the divider should be wall");
    }

    #[test]
    fn test_display_matches_input() {
        let maze: Maze = CORRIDOR.parse().expect("fixture should parse");

        assert_eq!(maze.to_string(), CORRIDOR);
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        let padded = format!("\n\n{CORRIDOR}\n  \n");
        let maze: Maze = padded.parse().expect("padding should be ignored");

        assert_eq!(maze.to_string(), CORRIDOR);
    }

    #[test]
    fn test_parse_too_small() {
        assert!("###\n#.#".parse::<Maze>().is_err(), "two rows is too few");
        assert!("##\n##\n##".parse::<Maze>().is_err(), "two columns is too few");
        assert!("".parse::<Maze>().is_err(), "empty input has no rows");
    }

    #[test]
    fn test_parse_ragged_rows() {
        assert!("####\n#..#\n###".parse::<Maze>().is_err());
    }

    #[test]
    fn test_parse_unknown_character() {
        assert!("####\n#.x#\n####".parse::<Maze>().is_err());
    }

    #[test]
    fn test_parse_open_border() {
        assert!("####\n#...\n####".parse::<Maze>().is_err(), "open right edge");
        assert!("#.##\n#..#\n####".parse::<Maze>().is_err(), "open top edge");
    }

    #[test]
    fn test_level_sketch_markers() {
        let maze: Maze = CORRIDOR.parse().expect("fixture should parse");
        let entities = Entities {
            hazards: vec![Position::new(3, 1)],
            collectibles: vec![Position::new(5, 2)],
        };
        let level = Level::new(maze, Position::new(1, 1), Position::new(1, 3), entities);

        let expected = "\
#######
#S.X..#
#####*#
#G....#
#######";
        assert_eq!(level.to_string(), expected);

        let route = [
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(3, 3),
            Position::new(1, 3),
        ];
        let expected_route = "\
#######
#SoX..#
#####*#
#G.o..#
#######";
        assert_eq!(sketch(&level, &route), expected_route);
    }
}
