//! Player move validation.

use crate::{
    map::Maze,
    placement::Entities,
    types::{Direction, Position},
};

/// Outcome of a single attempted move.
///
/// This enumeration is the whole answer of [`validate_move`]. It describes what the move would do
/// without doing any of it, so the caller decides how to apply it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The move is not allowed and the player stays put.
    ///
    /// This covers targets outside the grid, walls and hazards alike.
    Blocked,
    /// The player moves onto an ordinary cell.
    Moved {
        /// Index into [`Entities::collectibles`] of the collectible on the target cell, if any.
        ///
        /// The index is only valid until the collectible list changes.
        collectible: Option<usize>,
    },
    /// The player moves onto the goal, which ends the level.
    ///
    /// Reaching the goal takes precedence over a collectible, which can never share the goal
    /// cell anyway.
    ReachedGoal,
}

impl MoveResult {
    /// Returns `true` for every outcome that moves the player.
    pub const fn is_move(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// Decides what happens when the player at `position` steps in `direction`.
///
/// The checks run in a fixed order: a target outside the grid, a wall, or a hazard blocks the
/// move. Otherwise a collectible on the target is reported, and reaching `goal` ends the level.
/// Nothing is changed here; removing the collectible or moving the player is up to the caller.
pub fn validate_move(
    maze: &Maze,
    position: Position,
    direction: Direction,
    goal: Position,
    entities: &Entities,
) -> MoveResult {
    let Some(target) = position.neighbour(direction) else {
        return MoveResult::Blocked;
    };

    match maze.get(target) {
        None => MoveResult::Blocked,
        Some(cell) if !cell.is_path() => MoveResult::Blocked,
        Some(_) if entities.is_hazard(target) => MoveResult::Blocked,
        Some(_) => {
            let collectible = entities.collectible_at(target);
            if target == goal {
                MoveResult::ReachedGoal
            } else {
                MoveResult::Moved { collectible }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Open room with a pillar in the middle.
    const ROOM: &str = "\
#######
#.....#
#..#..#
#.....#
#######";

    fn room() -> Maze {
        ROOM.parse().expect("fixture should parse")
    }

    const GOAL: Position = Position::new(5, 3);

    #[test]
    fn test_plain_move() {
        let result = validate_move(
            &room(),
            Position::new(1, 1),
            Direction::Right,
            GOAL,
            &Entities::default(),
        );

        assert_eq!(result, MoveResult::Moved { collectible: None });
        assert!(result.is_move(), "a plain step moves the player");
    }

    #[test]
    fn test_wall_blocks() {
        let maze = room();
        let entities = Entities::default();

        assert_eq!(
            validate_move(&maze, Position::new(1, 1), Direction::Up, GOAL, &entities),
            MoveResult::Blocked,
            "outer wall"
        );
        assert_eq!(
            validate_move(&maze, Position::new(2, 2), Direction::Right, GOAL, &entities),
            MoveResult::Blocked,
            "pillar"
        );
    }

    #[test]
    fn test_out_of_bounds_blocks() {
        let maze = room();
        let entities = Entities::default();

        assert_eq!(
            validate_move(&maze, Position::new(0, 0), Direction::Left, GOAL, &entities),
            MoveResult::Blocked,
            "underflowing column"
        );
        assert_eq!(
            validate_move(&maze, Position::new(6, 2), Direction::Right, GOAL, &entities),
            MoveResult::Blocked,
            "column past the right edge"
        );
        assert_eq!(
            validate_move(&maze, Position::new(30, 30), Direction::Down, GOAL, &entities),
            MoveResult::Blocked,
            "position far outside the grid"
        );
    }

    #[test]
    fn test_hazard_blocks() {
        let entities = Entities {
            hazards: vec![Position::new(2, 1)],
            collectibles: Vec::new(),
        };

        assert_eq!(
            validate_move(&room(), Position::new(1, 1), Direction::Right, GOAL, &entities),
            MoveResult::Blocked
        );
        assert!(!MoveResult::Blocked.is_move());
    }

    #[test]
    fn test_collectible_is_reported() {
        let entities = Entities {
            hazards: Vec::new(),
            collectibles: vec![Position::new(4, 4), Position::new(1, 2)],
        };

        assert_eq!(
            validate_move(&room(), Position::new(1, 1), Direction::Down, GOAL, &entities),
            MoveResult::Moved {
                collectible: Some(1)
            }
        );
    }

    #[test]
    fn test_goal_is_reached() {
        assert_eq!(
            validate_move(
                &room(),
                Position::new(4, 3),
                Direction::Right,
                GOAL,
                &Entities::default()
            ),
            MoveResult::ReachedGoal
        );
    }

    #[test]
    fn test_blocked_cases_exhaustively() {
        let maze = room();
        let entities = Entities {
            hazards: vec![Position::new(4, 1), Position::new(2, 3)],
            collectibles: vec![Position::new(1, 3)],
        };

        for y in 0..=maze.height() {
            for x in 0..=maze.width() {
                for direction in Direction::ALL {
                    let position = Position::new(x, y);
                    let target = position.neighbour(direction);
                    let result = validate_move(&maze, position, direction, GOAL, &entities);

                    let should_block = target.map_or(true, |target| {
                        !maze.is_path(target) || entities.is_hazard(target)
                    });
                    assert_eq!(
                        result == MoveResult::Blocked,
                        should_block,
                        "{position:?} -> {direction:?} gave {result:?}"
                    );
                    assert_eq!(
                        result == MoveResult::ReachedGoal,
                        target == Some(GOAL),
                        "{position:?} -> {direction:?} goal detection gave {result:?}"
                    );
                }
            }
        }
    }
}
