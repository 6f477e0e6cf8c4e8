//! Randomized depth-first carving.
//!
//! The grid is walked in steps of two so every carving cell sits on the same coordinate parity as
//! the starting cell, with the odd offsets in between left as walls until a corridor is cut
//! through them. The walk keeps its own stack of frames instead of recursing, but draws from the
//! random source in exactly the order a recursive walk would.

use rand::{seq::SliceRandom as _, Rng};

use crate::{
    config::Tuning,
    map::Maze,
    types::{Cell, Direction, Position},
};

/// One pending cell of the depth-first walk.
struct Frame {
    /// Cell being expanded.
    position: Position,
    /// Number of carves between the starting cell and this one.
    depth: usize,
    /// Directions in the order this cell tries them.
    directions: [Direction; 4],
    /// Index of the next direction to try.
    cursor: usize,
    /// Number of branches carved out of this cell so far.
    branches: usize,
}

impl Frame {
    /// Enters a cell, shuffling the order its neighbours will be tried in.
    fn enter<R: Rng + ?Sized>(position: Position, depth: usize, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        Self {
            position,
            depth,
            directions,
            cursor: 0,
            branches: 0,
        }
    }
}

/// Returns the connecting wall cell and the carving cell two steps away in `direction`.
fn two_steps(position: Position, direction: Direction) -> Option<(Position, Position)> {
    let wall = position.neighbour(direction)?;
    let target = wall.neighbour(direction)?;

    Some((wall, target))
}

/// Carves a fresh maze of the given size.
///
/// Carving starts at `start`. Start and goal are opened at the end whatever the walk produced, so
/// both are always open, and a goal off the carving lattice is joined back onto it. Nothing here
/// guarantees the two are connected.
pub(crate) fn carve<R: Rng + ?Sized>(
    rng: &mut R,
    tuning: &Tuning,
    width: usize,
    height: usize,
    start: Position,
    goal: Position,
) -> Maze {
    let mut maze = Maze::filled(width, height);
    maze.open(start);

    let mut stack = vec![Frame::enter(start, 0, rng)];

    while let Some(frame) = stack.last_mut() {
        if let Some(direction) = frame.directions.get(frame.cursor).copied() {
            frame.cursor += 1;

            let Some((wall, target)) = two_steps(frame.position, direction) else {
                continue;
            };
            if !maze.is_interior(target) || maze.is_path(target) {
                continue;
            }

            let depth = frame.depth;
            // The draw happens even when the depth already forces the carve.
            if rng.gen_bool(tuning.carve_probability) || depth < tuning.max_depth {
                frame.branches += 1;
                maze.open(wall);
                maze.open(target);
                stack.push(Frame::enter(target, depth + 1, rng));
            }
        } else {
            let position = frame.position;
            if frame.branches == 0 && rng.gen_bool(tuning.loop_probability) {
                force_opening(&mut maze, position, rng);
            }
            let _ = stack.pop();
        }
    }

    maze.open(start);
    maze.open(goal);
    join_lattice(&mut maze, goal, start);

    maze
}

/// Connects `cell` to the lattice of carving cells the walk from `anchor` stands on.
///
/// The walk only visits cells sharing the anchor's coordinate parity. On a grid with an even side
/// the conventional goal sits off that lattice, where no two-step move can ever reach it. One step
/// towards the anchor along every mismatched axis lands back on the lattice, and each cell
/// stepped through is opened.
fn join_lattice(maze: &mut Maze, cell: Position, anchor: Position) {
    let horizontal = if cell.x > anchor.x {
        Direction::Left
    } else {
        Direction::Right
    };
    let vertical = if cell.y > anchor.y {
        Direction::Up
    } else {
        Direction::Down
    };

    let mut current = cell;
    for (mismatched, direction) in [
        (cell.x % 2 != anchor.x % 2, horizontal),
        (cell.y % 2 != anchor.y % 2, vertical),
    ] {
        if !mismatched {
            continue;
        }
        let Some(next) = current.neighbour(direction) else {
            return;
        };
        maze.open(next);
        current = next;
    }
}

/// Cuts one extra corridor out of a dead end.
///
/// A direction qualifies when its wall cell is still closed and the cell beyond it is interior.
/// Both are opened, which either joins an existing corridor or pulls in a cell the walk skipped.
fn force_opening<R: Rng + ?Sized>(maze: &mut Maze, position: Position, rng: &mut R) {
    let candidates: Vec<(Position, Position)> = Direction::ALL
        .into_iter()
        .filter_map(|direction| two_steps(position, direction))
        .filter(|&(wall, target)| {
            maze.get(wall) == Some(Cell::Wall) && maze.is_interior(target)
        })
        .collect();

    if let Some(&(wall, target)) = candidates.choose(rng) {
        maze.open(wall);
        maze.open(target);
    }
}
