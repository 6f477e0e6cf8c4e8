//! Reachability search over open cells.
//!
//! This module answers whether the goal can be reached from the start, and if so along which
//! route. Both questions run the same depth-first search, treating blocker cells as if they were
//! walls.

use std::collections::{HashMap, HashSet};

use crate::{
    map::Maze,
    types::{Direction, Position},
};

/// Returns `true` when `position` can be stood on.
fn passable(maze: &Maze, position: Position, blockers: &[Position]) -> bool {
    maze.is_path(position) && !blockers.contains(&position)
}

/// Runs the depth-first search and returns the discovery tree if the goal was reached.
///
/// Each entry maps a cell to the cell it was discovered from. The start has no entry.
fn search(
    maze: &Maze,
    start: Position,
    goal: Position,
    blockers: &[Position],
) -> Option<HashMap<Position, Position>> {
    if !passable(maze, start, blockers) || !passable(maze, goal, blockers) {
        return None;
    }

    let mut parents = HashMap::new();
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if current == goal {
            return Some(parents);
        }

        // Pushed in reverse so the first direction is explored first.
        for direction in Direction::ALL.into_iter().rev() {
            let Some(next) = current.neighbour(direction) else {
                continue;
            };
            if !passable(maze, next, blockers) || !seen.insert(next) {
                continue;
            }

            let _ = parents.insert(next, current);
            stack.push(next);
        }
    }

    None
}

/// Checks whether `goal` is reachable from `start`.
///
/// Only open cells are walked and every cell listed in `blockers` is impassable. A start or goal
/// that is out of bounds, closed, or blocked makes the maze unsolvable. A start equal to the goal
/// is trivially solvable when that cell is passable.
pub fn is_solvable(maze: &Maze, start: Position, goal: Position, blockers: &[Position]) -> bool {
    search(maze, start, goal, blockers).is_some()
}

/// Finds a route from `start` to `goal`.
///
/// The returned route begins with `start`, ends with `goal`, and every consecutive pair of cells
/// is one unit step apart. The route is the one the depth-first search discovered, not
/// necessarily the shortest. Returns `None` under the same conditions [`is_solvable`] returns
/// `false`.
pub fn solution_path(
    maze: &Maze,
    start: Position,
    goal: Position,
    blockers: &[Position],
) -> Option<Vec<Position>> {
    let parents = search(maze, start, goal, blockers)?;

    let mut route = vec![goal];
    let mut current = goal;
    while current != start {
        current = *parents.get(&current)?;
        route.push(current);
    }
    route.reverse();

    Some(route)
}
