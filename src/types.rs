//! Core value types shared by the maze engine: cells, positions and movement directions.

/// State of a single grid cell.
///
/// Carving turns [`Cell::Wall`] cells into [`Cell::Path`] cells. Nothing else ever changes a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Solid cell that can never be entered.
    #[default]
    Wall,
    /// Open corridor cell.
    Path,
}

impl Cell {
    /// Returns `true` for [`Cell::Path`].
    pub const fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }
}

/// Grid coordinate.
///
/// Positions are plain column/row pairs. They are not tied to any particular maze, so a position
/// may lie outside a given grid; lookups on [`Maze`](crate::Maze) return `None` in that case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing to the right.
    pub x: usize,
    /// Row, growing downwards.
    pub y: usize,
}

impl Position {
    /// Builds a position from a column and a row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the position one cell away in `direction`.
    ///
    /// Stepping off the top or left edge of the coordinate space yields `None`. The upper bound is
    /// not checked here because it depends on the grid being addressed.
    pub const fn neighbour(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self { x, y })
    }
}

/// One of the four unit cardinal moves.
///
/// This is the only delta the engine accepts, which rules out diagonal or multi-cell jumps at the
/// type level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    /// Every direction, in the order the depth-first searches explore them.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Returns the `(dx, dy)` unit offset of this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default_is_wall() {
        assert_eq!(Cell::default(), Cell::Wall, "fresh cells should be walls");
        assert!(Cell::Path.is_path(), "path cells should report as path");
        assert!(!Cell::Wall.is_path(), "wall cells should not report as path");
    }

    #[test]
    fn test_neighbour_in_every_direction() {
        let origin = Position::new(3, 3);

        assert_eq!(origin.neighbour(Direction::Up), Some(Position::new(3, 2)));
        assert_eq!(origin.neighbour(Direction::Down), Some(Position::new(3, 4)));
        assert_eq!(origin.neighbour(Direction::Left), Some(Position::new(2, 3)));
        assert_eq!(origin.neighbour(Direction::Right), Some(Position::new(4, 3)));
    }

    #[test]
    fn test_neighbour_underflow() {
        let corner = Position::new(0, 0);

        assert_eq!(corner.neighbour(Direction::Up), None, "row zero has no upper neighbour");
        assert_eq!(corner.neighbour(Direction::Left), None, "column zero has no left neighbour");
        assert_eq!(
            corner.neighbour(Direction::Down),
            Some(Position::new(0, 1)),
            "downward step from the corner should succeed"
        );
    }

    #[test]
    fn test_offsets_are_unit_vectors() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            assert_eq!(dx.abs() + dy.abs(), 1, "{direction:?} should be a unit move");
        }
    }

    #[test]
    fn test_all_directions_are_distinct() {
        for (idx, first) in Direction::ALL.iter().enumerate() {
            for second in Direction::ALL.iter().skip(idx + 1) {
                assert_ne!(first, second, "direction list should not repeat entries");
            }
        }
    }
}
