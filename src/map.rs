//! Maze grid storage and grid dimensions.
//!
//! This module contains the [`Maze`] struct, the rectangular grid of [`Cell`]s every other part of
//! the engine reads, along with [`Dimensions`] for deriving grid sizes from a pixel canvas.

use color_eyre::eyre::{ensure, Result};

use crate::types::{Cell, Position};

/// Smallest accepted side length for a generated maze.
///
/// Five is the smallest size that leaves an interior holding two distinct carving cells, so start
/// and goal can differ.
pub const MIN_SIDE: usize = 5;

/// Rectangular maze grid.
///
/// This structure is the single source of truth for which cells can be walked on. Cells are
/// stored row-major and addressed by [`Position`], with `(0, 0)` in the top-left corner. Lookups
/// outside the grid never panic; they report `None` or `false` instead.
///
/// The outer ring is always wall: generation never carves it and text parsing refuses input that
/// opens it. Once built, a maze is only read, so hazards and collectibles live beside it in
/// [`Entities`](crate::Entities) rather than inside its cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Number of columns.
    ///
    /// This includes the two wall columns of the outer ring.
    width: usize,
    /// Number of rows.
    ///
    /// This includes the two wall rows of the outer ring.
    height: usize,
    /// Row-major cell storage.
    ///
    /// This vector always holds exactly `width * height` cells, so every in-bounds position maps
    /// to exactly one entry.
    cells: Vec<Cell>,
}

impl Maze {
    /// Builds a maze of the given size with every cell set to wall.
    ///
    /// The size must already have passed [`Dimensions::validate`].
    pub(crate) fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    /// Builds a maze from already validated rows.
    pub(crate) const fn from_parts(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns in the grid.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in the grid.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `position`, or `None` when it lies outside the grid.
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|idx| self.cells.get(idx).copied())
    }

    /// Returns `true` when `position` is inside the grid and open.
    pub fn is_path(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_path)
    }

    /// Returns the size of the grid.
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Returns `true` when `position` lies strictly inside the outer wall ring.
    pub const fn is_interior(&self, position: Position) -> bool {
        self.dimensions().is_interior(position)
    }

    /// Returns `true` when `position` lies on the outer ring of the grid.
    pub const fn is_border(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height && !self.is_interior(position)
    }

    /// Iterates over the grid one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Iterates over every position of the grid together with its cell.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x, y), *cell))
        })
    }

    /// Counts the open cells of the grid.
    pub fn path_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_path()).count()
    }

    /// Opens the cell at `position`.
    ///
    /// Only interior positions are ever opened; anything on the outer ring or outside the grid is
    /// left untouched.
    pub(crate) fn open(&mut self, position: Position) {
        if !self.is_interior(position) {
            return;
        }
        if let Some(slot) = self
            .index(position)
            .and_then(|idx| self.cells.get_mut(idx))
        {
            *slot = Cell::Path;
        }
    }

    /// Maps a position to its offset in the row-major storage.
    const fn index(&self, position: Position) -> Option<usize> {
        if position.x < self.width && position.y < self.height {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }
}

/// Width and height of a maze grid, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Dimensions {
    /// Builds dimensions from a width and a height.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Derives grid dimensions from a pixel canvas and a square tile size.
    ///
    /// Partial tiles at the right and bottom edges are dropped.
    ///
    /// # Errors
    ///
    /// This function returns an error if the tile size is zero.
    pub fn from_canvas(pixel_width: usize, pixel_height: usize, tile_size: usize) -> Result<Self> {
        ensure!(tile_size > 0, "tile size must be positive");

        Ok(Self {
            width: pixel_width / tile_size,
            height: pixel_height / tile_size,
        })
    }

    /// Conventional start cell, the top-left interior corner.
    pub const fn start(self) -> Position {
        Position::new(1, 1)
    }

    /// Conventional goal cell, the bottom-right interior corner.
    pub const fn goal(self) -> Position {
        Position::new(
            self.width.saturating_sub(2),
            self.height.saturating_sub(2),
        )
    }

    /// Returns `true` when `position` lies strictly inside the outer wall ring of a grid this size.
    pub const fn is_interior(self, position: Position) -> bool {
        position.x >= 1
            && position.y >= 1
            && position.x < self.width.saturating_sub(1)
            && position.y < self.height.saturating_sub(1)
    }

    /// Checks that the dimensions can hold a generated maze.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - Either side is shorter than [`MIN_SIDE`]
    /// - The cell count does not fit in a `usize`
    pub fn validate(self) -> Result<()> {
        ensure!(
            self.width >= MIN_SIDE && self.height >= MIN_SIDE,
            "maze must be at least {MIN_SIDE}x{MIN_SIDE}, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.width.checked_mul(self.height).is_some(),
            "maze of {}x{} cells is too large to store",
            self.width,
            self.height
        );

        Ok(())
    }
}
