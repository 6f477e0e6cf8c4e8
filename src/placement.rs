//! Hazard and collectible placement by rejection sampling.

use log::{debug, warn};
use rand::Rng;

use crate::{config::Tuning, map::Maze, pathfinding, types::Position};

/// Hazards and collectibles of a level.
///
/// This structure holds everything that sits on top of the maze grid. Both lists hold distinct
/// open positions, never share a position with each other, and never contain the start or the
/// goal.
///
/// Entries are removed during play, by collecting or by destroying a hazard, and they are never
/// added. The order of [`Entities::collectibles`] is meaningful because
/// [`MoveResult::Moved`](crate::MoveResult::Moved) reports collectibles by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entities {
    /// Cells that block movement entirely.
    ///
    /// A hazard acts like a wall for both movement and route searches until it is destroyed.
    pub hazards: Vec<Position>,
    /// Cells holding something the player picks up by walking over it.
    ///
    /// Collectibles never block movement. Walking onto one reports its index here, and removing
    /// it is left to the game state.
    pub collectibles: Vec<Position>,
}

impl Entities {
    /// Returns `true` when a hazard sits on `position`.
    pub fn is_hazard(&self, position: Position) -> bool {
        self.hazards.contains(&position)
    }

    /// Returns the index of the collectible sitting on `position`, if any.
    pub fn collectible_at(&self, position: Position) -> Option<usize> {
        self.collectibles
            .iter()
            .position(|collectible| *collectible == position)
    }

    /// Returns `true` when any entity sits on `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.is_hazard(position) || self.collectibles.contains(&position)
    }
}

/// Number of hazards and collectibles, either requested or missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    /// Number of hazards.
    pub hazards: usize,
    /// Number of collectibles.
    pub collectibles: usize,
}

impl Counts {
    /// Returns `true` when both counts are zero.
    pub const fn is_empty(self) -> bool {
        self.hazards == 0 && self.collectibles == 0
    }
}

/// Outcome of placing entities on a maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Entities that were placed.
    pub entities: Entities,
    /// Entities that were asked for.
    pub requested: Counts,
}

impl Placement {
    /// Reports how many requested entities could not be placed.
    ///
    /// A non-empty shortfall means the attempt cap ran out, usually because the maze has too few
    /// free open cells.
    pub fn shortfall(&self) -> Counts {
        Counts {
            hazards: self
                .requested
                .hazards
                .saturating_sub(self.entities.hazards.len()),
            collectibles: self
                .requested
                .collectibles
                .saturating_sub(self.entities.collectibles.len()),
        }
    }
}

/// Draws uniformly random interior positions until one passes `accept`.
///
/// Gives up after `attempts` draws.
fn sample<R, F>(rng: &mut R, maze: &Maze, attempts: usize, accept: F) -> Option<Position>
where
    R: Rng + ?Sized,
    F: Fn(Position) -> bool,
{
    if maze.width() < 3 || maze.height() < 3 {
        return None;
    }

    (0..attempts).find_map(|_| {
        let candidate = Position::new(
            rng.gen_range(1..maze.width() - 1),
            rng.gen_range(1..maze.height() - 1),
        );
        accept(candidate).then_some(candidate)
    })
}

/// Places `counts` hazards and then collectibles on open cells of `maze`.
///
/// Each entity is sampled independently and gets at most `tuning.placement_attempts` draws. Once
/// one entity of a kind runs out of draws, no further entity of that kind is tried and the
/// missing amount shows up in [`Placement::shortfall`].
pub(crate) fn place<R: Rng + ?Sized>(
    rng: &mut R,
    tuning: &Tuning,
    maze: &Maze,
    start: Position,
    goal: Position,
    counts: Counts,
) -> Placement {
    let mut entities = Entities::default();
    let free = |entities: &Entities, candidate: Position| {
        maze.is_path(candidate)
            && candidate != start
            && candidate != goal
            && !entities.is_occupied(candidate)
    };

    for _ in 0..counts.hazards {
        let spot = sample(rng, maze, tuning.placement_attempts, |candidate| {
            free(&entities, candidate)
                && (!tuning.preserve_route || {
                    let mut blockers = entities.hazards.clone();
                    blockers.push(candidate);
                    pathfinding::is_solvable(maze, start, goal, &blockers)
                })
        });
        let Some(spot) = spot else {
            break;
        };
        entities.hazards.push(spot);
    }

    for _ in 0..counts.collectibles {
        let Some(spot) = sample(rng, maze, tuning.placement_attempts, |candidate| {
            free(&entities, candidate)
        }) else {
            break;
        };
        entities.collectibles.push(spot);
    }

    let placement = Placement {
        entities,
        requested: counts,
    };
    let shortfall = placement.shortfall();
    if shortfall.is_empty() {
        debug!(
            "placed {} hazards and {} collectibles",
            counts.hazards, counts.collectibles
        );
    } else {
        warn!(
            "could not place {} of {} hazards and {} of {} collectibles",
            shortfall.hazards, counts.hazards, shortfall.collectibles, counts.collectibles
        );
    }

    placement
}
