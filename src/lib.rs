//! Seeded maze generation for a small grid maze game.
//!
//! The crate carves mazes with a randomized depth-first walk, retries until the goal is reachable,
//! scatters hazards and collectibles over open cells, and judges player moves. Everything a
//! rendering layer needs is exposed as plain data, and the two queries a game loop calls most,
//! [`is_solvable`] and [`validate_move`], are pure functions.
//!
//! A [`MazeEngine`] owns the random source, so seeding it makes generation and placement fully
//! reproducible. [`GameState`] carries out the consequences of moves between levels.

mod carving;
mod config;
mod engine;
mod game;
pub mod logging;
mod map;
mod movement;
mod pathfinding;
mod placement;
mod text;
mod types;

pub use config::{Exhaustion, Tuning};
pub use engine::{random_seed, Level, MazeEngine, SeededEngine};
pub use game::{GameState, Status};
pub use map::{Dimensions, Maze, MIN_SIDE};
pub use movement::{validate_move, MoveResult};
pub use pathfinding::{is_solvable, solution_path};
pub use placement::{Counts, Entities, Placement};
pub use types::{Cell, Direction, Position};
