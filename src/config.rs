//! Generation tuning knobs.
//!
//! [`Tuning`] is the single configuration value of the engine. It derives [`clap::Args`] so the
//! binary can flatten it straight into its command line, and it is checked once through
//! [`Tuning::validate`] when an engine is built.

use std::ops::RangeInclusive;

use clap::{Args, ValueEnum};
use color_eyre::eyre::{ensure, Result};

/// Default chance of carving into an unvisited neighbour once past the forced depth.
pub(crate) const DEFAULT_CARVE_PROBABILITY: f64 = 0.85;
/// Default depth below which every available neighbour is carved.
pub(crate) const DEFAULT_MAX_DEPTH: usize = 8;
/// Default chance of forcing an extra opening out of a dead end.
pub(crate) const DEFAULT_LOOP_PROBABILITY: f64 = 0.1;
/// Default number of full carves tried before giving up on solvability.
pub(crate) const DEFAULT_GENERATION_ATTEMPTS: usize = 5;
/// Default number of samples spent on each entity before it is reported missing.
pub(crate) const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

/// Behaviour when every generation attempt produced an unsolvable maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Exhaustion {
    /// Keep the last candidate even though the goal may be unreachable.
    #[default]
    AcceptLast,
    /// Report an error instead of returning a maze.
    Fail,
}

/// Tunable parameters for carving, retrying and entity placement.
#[derive(Args, Clone, Debug, PartialEq)]
pub struct Tuning {
    /// Chance of carving into a free neighbour once past the forced depth.
    ///
    /// Lower values leave more of the grid as solid wall and make unreachable goals more likely,
    /// which the generation retries then have to make up for.
    #[arg(long, default_value_t = DEFAULT_CARVE_PROBABILITY)]
    pub carve_probability: f64,
    /// Depth below which every free neighbour is carved unconditionally.
    ///
    /// Depth counts carves from the start cell, so this guarantees a densely carved area around
    /// the start whatever the carve probability.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
    /// Chance of forcing an extra opening out of a dead end.
    ///
    /// Openings may join an existing corridor, so non-zero values add loops to an otherwise
    /// tree-shaped maze.
    #[arg(long, default_value_t = DEFAULT_LOOP_PROBABILITY)]
    pub loop_probability: f64,
    /// Full carves tried before giving up on solvability.
    #[arg(long, default_value_t = DEFAULT_GENERATION_ATTEMPTS)]
    pub generation_attempts: usize,
    /// What to do when no attempt produced a solvable maze.
    ///
    /// The default keeps the last candidate and logs a warning; `fail` turns exhaustion into an
    /// error.
    #[arg(long, value_enum, default_value_t = Exhaustion::AcceptLast)]
    pub on_exhaustion: Exhaustion,
    /// Fewest hazards placed per level.
    #[arg(long, default_value_t = 3)]
    pub hazards_min: usize,
    /// Most hazards placed per level.
    #[arg(long, default_value_t = 5)]
    pub hazards_max: usize,
    /// Fewest collectibles placed per level.
    #[arg(long, default_value_t = 2)]
    pub collectibles_min: usize,
    /// Most collectibles placed per level.
    #[arg(long, default_value_t = 4)]
    pub collectibles_max: usize,
    /// Random samples spent on each entity before it is reported missing.
    ///
    /// This bounds placement on crowded or barely carved mazes. Missing entities show up as a
    /// shortfall on the level instead of an error.
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_ATTEMPTS)]
    pub placement_attempts: usize,
    /// Refuse hazards that would cut the goal off from the start.
    ///
    /// Off by default, in which case the player may have to destroy a hazard to get through.
    #[arg(long)]
    pub preserve_route: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            carve_probability: DEFAULT_CARVE_PROBABILITY,
            max_depth: DEFAULT_MAX_DEPTH,
            loop_probability: DEFAULT_LOOP_PROBABILITY,
            generation_attempts: DEFAULT_GENERATION_ATTEMPTS,
            on_exhaustion: Exhaustion::AcceptLast,
            hazards_min: 3,
            hazards_max: 5,
            collectibles_min: 2,
            collectibles_max: 4,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            preserve_route: false,
        }
    }
}

impl Tuning {
    /// Range the per-level hazard count is drawn from.
    pub const fn hazard_range(&self) -> RangeInclusive<usize> {
        self.hazards_min..=self.hazards_max
    }

    /// Range the per-level collectible count is drawn from.
    pub const fn collectible_range(&self) -> RangeInclusive<usize> {
        self.collectibles_min..=self.collectibles_max
    }

    /// Checks that every knob holds a usable value.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - A probability lies outside `[0, 1]` or is not a number
    /// - Either count range is empty
    /// - Either attempt cap is zero
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.carve_probability),
            "carve probability must lie in [0, 1], got {}",
            self.carve_probability
        );
        ensure!(
            (0.0..=1.0).contains(&self.loop_probability),
            "loop probability must lie in [0, 1], got {}",
            self.loop_probability
        );
        ensure!(
            self.hazards_min <= self.hazards_max,
            "hazard range {}..={} is empty",
            self.hazards_min,
            self.hazards_max
        );
        ensure!(
            self.collectibles_min <= self.collectibles_max,
            "collectible range {}..={} is empty",
            self.collectibles_min,
            self.collectibles_max
        );
        ensure!(
            self.generation_attempts > 0,
            "at least one generation attempt is required"
        );
        ensure!(
            self.placement_attempts > 0,
            "at least one placement attempt is required"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Minimal command line wrapping the tuning flags.
    #[derive(Parser)]
    struct Harness {
        /// Flattened tuning flags.
        #[command(flatten)]
        tuning: Tuning,
    }

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();

        assert!(tuning.validate().is_ok(), "defaults should validate");
        assert_eq!(tuning.hazard_range(), 3..=5);
        assert_eq!(tuning.collectible_range(), 2..=4);
        assert_eq!(tuning.generation_attempts, 5);
        assert_eq!(tuning.on_exhaustion, Exhaustion::AcceptLast);
    }

    #[test]
    fn test_probability_bounds() {
        let mut tuning = Tuning {
            carve_probability: 1.5,
            ..Tuning::default()
        };
        assert!(tuning.validate().is_err(), "carve probability above one");

        tuning.carve_probability = f64::NAN;
        assert!(tuning.validate().is_err(), "carve probability not a number");

        tuning.carve_probability = 0.0;
        tuning.loop_probability = -0.1;
        assert!(tuning.validate().is_err(), "negative loop probability");

        tuning.loop_probability = 1.0;
        assert!(tuning.validate().is_ok(), "both edges of [0, 1] are allowed");
    }

    #[test]
    fn test_empty_ranges() {
        let hazards = Tuning {
            hazards_min: 4,
            hazards_max: 2,
            ..Tuning::default()
        };
        assert!(hazards.validate().is_err(), "empty hazard range");

        let collectibles = Tuning {
            collectibles_min: 1,
            collectibles_max: 0,
            ..Tuning::default()
        };
        assert!(collectibles.validate().is_err(), "empty collectible range");
    }

    #[test]
    fn test_zero_attempts() {
        let generation = Tuning {
            generation_attempts: 0,
            ..Tuning::default()
        };
        assert!(generation.validate().is_err(), "zero generation attempts");

        let placement = Tuning {
            placement_attempts: 0,
            ..Tuning::default()
        };
        assert!(placement.validate().is_err(), "zero placement attempts");
    }

    #[test]
    fn test_command_line_defaults_match_default() {
        let harness = Harness::try_parse_from(["mazerun"]).expect("no flags should parse");

        assert_eq!(harness.tuning, Tuning::default());
    }

    #[test]
    fn test_command_line_overrides() {
        let harness = Harness::try_parse_from([
            "mazerun",
            "--carve-probability",
            "0.5",
            "--max-depth",
            "2",
            "--on-exhaustion",
            "fail",
            "--hazards-max",
            "9",
            "--preserve-route",
        ])
        .expect("flags should parse");

        assert_eq!(harness.tuning.max_depth, 2);
        assert_eq!(harness.tuning.on_exhaustion, Exhaustion::Fail);
        assert_eq!(harness.tuning.hazards_max, 9);
        assert!(harness.tuning.preserve_route, "flag should switch the guard on");
        assert!(
            (harness.tuning.carve_probability - 0.5).abs() < f64::EPSILON,
            "carve probability should be overridden"
        );
    }

    #[test]
    fn test_command_line_rejects_unknown_policy() {
        assert!(Harness::try_parse_from(["mazerun", "--on-exhaustion", "retry"]).is_err());
    }
}
