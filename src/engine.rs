//! Maze engine: generation with solvability retries, entity placement and levels.

use color_eyre::eyre::{bail, ensure, Result};
use log::{debug, info, warn};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::{
    carving,
    config::{Exhaustion, Tuning},
    map::{Dimensions, Maze},
    pathfinding,
    placement::{self, Counts, Entities, Placement},
    text,
    types::Position,
};

/// Engine driven by the deterministic generator used for seeded runs.
pub type SeededEngine = MazeEngine<ChaCha8Rng>;

/// Draws a fresh seed from the thread-local generator.
///
/// Logging the returned seed and handing it to [`MazeEngine::seeded`] makes any run reproducible.
pub fn random_seed() -> u64 {
    rand::random()
}

/// Maze generator and entity placer.
///
/// The engine owns its tuning and its random source and nothing else. Every maze, count and
/// placement it hands out is a fresh value; [`is_solvable`](crate::is_solvable) and
/// [`validate_move`](crate::validate_move) need no engine at all.
#[derive(Debug)]
pub struct MazeEngine<R = ChaCha8Rng> {
    /// Validated generation parameters.
    tuning: Tuning,
    /// Source of every random decision.
    rng: R,
}

impl<R: Rng> MazeEngine<R> {
    /// Builds an engine around an existing random source.
    ///
    /// # Errors
    ///
    /// This function returns an error if the tuning does not validate.
    pub fn new(tuning: Tuning, rng: R) -> Result<Self> {
        tuning.validate()?;

        Ok(Self { tuning, rng })
    }

    /// Builds an engine whose random source is seeded from `seed`.
    ///
    /// Two engines built from the same tuning and seed produce identical mazes and placements.
    ///
    /// # Errors
    ///
    /// This function returns an error if the tuning does not validate.
    pub fn seeded(tuning: Tuning, seed: u64) -> Result<Self>
    where
        R: rand::SeedableRng,
    {
        Self::new(tuning, R::seed_from_u64(seed))
    }

    /// Returns the tuning the engine was built with.
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Generates a maze whose goal is reachable from its start.
    ///
    /// Each attempt carves a fresh maze and checks it with no blockers. Up to
    /// `generation_attempts` attempts are made; if none is solvable the outcome follows
    /// `on_exhaustion`, which by default keeps the last candidate and logs a warning.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - Either side is shorter than [`MIN_SIDE`](crate::MIN_SIDE)
    /// - The start or the goal is not an interior cell
    /// - Every attempt was unsolvable and the tuning asks to fail in that case
    pub fn generate(
        &mut self,
        width: usize,
        height: usize,
        start: Position,
        goal: Position,
    ) -> Result<Maze> {
        let dimensions = Dimensions::new(width, height);
        dimensions.validate()?;
        ensure!(
            dimensions.is_interior(start),
            "start {start:?} is outside the interior of a {width}x{height} maze"
        );
        ensure!(
            dimensions.is_interior(goal),
            "goal {goal:?} is outside the interior of a {width}x{height} maze"
        );

        let mut attempt = 0;
        loop {
            attempt += 1;
            let maze = carving::carve(&mut self.rng, &self.tuning, width, height, start, goal);

            if pathfinding::is_solvable(&maze, start, goal, &[]) {
                debug!(
                    "attempt {attempt} carved a solvable maze with {} open cells",
                    maze.path_count()
                );
                return Ok(maze);
            }
            debug!("attempt {attempt} left the goal unreachable");

            if attempt >= self.tuning.generation_attempts {
                match self.tuning.on_exhaustion {
                    Exhaustion::AcceptLast => {
                        warn!(
                            "no solvable {width}x{height} maze after {attempt} attempts, keeping the last one"
                        );
                        return Ok(maze);
                    }
                    Exhaustion::Fail => {
                        bail!("no solvable {width}x{height} maze after {attempt} attempts")
                    }
                }
            }
        }
    }

    /// Draws the number of hazards and collectibles for a level from the tuned ranges.
    pub fn draw_counts(&mut self) -> Counts {
        Counts {
            hazards: self.rng.gen_range(self.tuning.hazard_range()),
            collectibles: self.rng.gen_range(self.tuning.collectible_range()),
        }
    }

    /// Places hazards and collectibles on open cells of `maze`.
    ///
    /// Entities never land on the start, the goal, a wall, or each other. Anything that could not
    /// be placed within the attempt cap shows up in [`Placement::shortfall`].
    pub fn place_entities(
        &mut self,
        maze: &Maze,
        start: Position,
        goal: Position,
        counts: Counts,
    ) -> Placement {
        placement::place(&mut self.rng, &self.tuning, maze, start, goal, counts)
    }

    /// Generates a complete level with the conventional start and goal corners.
    ///
    /// # Errors
    ///
    /// This function returns the errors of [`MazeEngine::generate`].
    pub fn generate_level(&mut self, dimensions: Dimensions) -> Result<Level> {
        let (start, goal) = (dimensions.start(), dimensions.goal());
        let maze = self.generate(dimensions.width, dimensions.height, start, goal)?;
        let counts = self.draw_counts();
        let placement = self.place_entities(&maze, start, goal, counts);
        let shortfall = placement.shortfall();

        info!(
            "generated {}x{} level with {} hazards and {} collectibles",
            dimensions.width,
            dimensions.height,
            placement.entities.hazards.len(),
            placement.entities.collectibles.len()
        );

        Ok(Level {
            maze,
            start,
            goal,
            entities: placement.entities,
            shortfall,
        })
    }
}

/// A generated maze together with its endpoints and entities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// Grid of the level, never changed after generation.
    maze: Maze,
    /// Cell the player starts on.
    start: Position,
    /// Cell that ends the level.
    goal: Position,
    /// Hazards and collectibles still on the board.
    entities: Entities,
    /// Entities that were requested but could not be placed.
    shortfall: Counts,
}

impl Level {
    /// Assembles a level from its parts, with nothing missing.
    pub const fn new(maze: Maze, start: Position, goal: Position, entities: Entities) -> Self {
        Self {
            maze,
            start,
            goal,
            entities,
            shortfall: Counts {
                hazards: 0,
                collectibles: 0,
            },
        }
    }

    /// Grid of the level.
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Cell the player starts on.
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Cell that ends the level.
    pub const fn goal(&self) -> Position {
        self.goal
    }

    /// Hazards and collectibles still on the board.
    pub const fn entities(&self) -> &Entities {
        &self.entities
    }

    /// Mutable access to the entities, for removing them during play.
    pub(crate) fn entities_mut(&mut self) -> &mut Entities {
        &mut self.entities
    }

    /// Entities that were requested but could not be placed.
    pub const fn shortfall(&self) -> Counts {
        self.shortfall
    }

    /// Finds a route from start to goal around the current hazards.
    pub fn solution(&self) -> Option<Vec<Position>> {
        pathfinding::solution_path(&self.maze, self.start, self.goal, &self.entities.hazards)
    }

    /// Draws the level as text with `route` overlaid.
    pub fn sketch_with_route(&self, route: &[Position]) -> String {
        text::sketch(self, route)
    }
}
