//! Game state controller.
//!
//! [`GameState`] is the one owner of everything that changes during play. The engine's pure
//! queries decide what a move does; this module carries out the consequences.

use color_eyre::eyre::Result;
use log::{debug, info};
use rand::Rng;

use crate::{
    engine::{Level, MazeEngine},
    movement::{self, MoveResult},
    types::{Direction, Position},
};

/// Whether the current level is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    /// The player has not reached the goal yet.
    #[default]
    Playing,
    /// The player reached the goal; no further moves are accepted until the next level.
    Won,
}

/// State of a running game.
///
/// This structure holds the current level, where the player stands, and the running counters. It
/// starts on a level handed in by the caller and moves on to fresh levels through
/// [`GameState::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Level being played.
    level: Level,
    /// Cell the player stands on.
    player: Position,
    /// One-based number of the current level.
    level_number: usize,
    /// Collectibles picked up across all levels.
    collected: usize,
    /// Hazards destroyed across all levels.
    destroyed: usize,
    /// Accepted moves across all levels.
    moves: usize,
    /// Progress on the current level.
    status: Status,
}

impl GameState {
    /// Starts a game on `level` with the player on its start cell.
    pub const fn new(level: Level) -> Self {
        let player = level.start();

        Self {
            level,
            player,
            level_number: 1,
            collected: 0,
            destroyed: 0,
            moves: 0,
            status: Status::Playing,
        }
    }

    /// Level being played.
    pub const fn level(&self) -> &Level {
        &self.level
    }

    /// Cell the player stands on.
    pub const fn player(&self) -> Position {
        self.player
    }

    /// One-based number of the current level.
    pub const fn level_number(&self) -> usize {
        self.level_number
    }

    /// Collectibles picked up so far.
    pub const fn collected(&self) -> usize {
        self.collected
    }

    /// Hazards destroyed so far.
    pub const fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Accepted moves so far.
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Progress on the current level.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Tries to move the player one cell in `direction`.
    ///
    /// The move is judged by [`validate_move`](crate::validate_move) and then applied: a
    /// collectible on the target is removed and counted, and reaching the goal marks the level as
    /// won. Once won, every further step is blocked.
    pub fn step(&mut self, direction: Direction) -> MoveResult {
        if self.status == Status::Won {
            return MoveResult::Blocked;
        }

        let result = movement::validate_move(
            self.level.maze(),
            self.player,
            direction,
            self.level.goal(),
            self.level.entities(),
        );

        let Some(target) = self.player.neighbour(direction) else {
            return result;
        };
        match result {
            MoveResult::Blocked => return result,
            MoveResult::Moved {
                collectible: Some(idx),
            } => {
                let collectibles = &mut self.level.entities_mut().collectibles;
                if idx < collectibles.len() {
                    let _ = collectibles.remove(idx);
                    self.collected += 1;
                    debug!("collected item at {target:?}");
                }
            }
            MoveResult::Moved { collectible: None } => {}
            MoveResult::ReachedGoal => {
                self.status = Status::Won;
                info!("level {} finished in {} moves", self.level_number, self.moves + 1);
            }
        }

        self.player = target;
        self.moves += 1;

        result
    }

    /// Destroys the hazard directly next to the player in `direction`.
    ///
    /// Returns `false` and changes nothing when there is no hazard there or the level is already
    /// won.
    pub fn destroy_hazard(&mut self, direction: Direction) -> bool {
        if self.status == Status::Won {
            return false;
        }
        let Some(target) = self.player.neighbour(direction) else {
            return false;
        };

        let hazards = &mut self.level.entities_mut().hazards;
        let Some(idx) = hazards.iter().position(|hazard| *hazard == target) else {
            return false;
        };
        let _ = hazards.remove(idx);
        self.destroyed += 1;
        debug!("destroyed hazard at {target:?}");

        true
    }

    /// Replaces the level with a freshly generated one of the same size.
    ///
    /// The player goes back to the start, the level number goes up by one, and the running
    /// counters carry over.
    ///
    /// # Errors
    ///
    /// This function returns the errors of [`MazeEngine::generate_level`].
    pub fn advance<R: Rng>(&mut self, engine: &mut MazeEngine<R>) -> Result<()> {
        let level = engine.generate_level(self.level.maze().dimensions())?;

        self.player = level.start();
        self.level = level;
        self.level_number += 1;
        self.status = Status::Playing;

        Ok(())
    }
}
