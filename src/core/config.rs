//! Ruleset configuration.
//!
//! A game is configured once, at construction, by a [`Ruleset`]: the game
//! mode, the movement and exploration rule variants, and every numeric
//! budget, cost and reward the engine consults. Feature flags (land tiles,
//! piracy, disasters) are derived from the [`GameMode`] rather than stored,
//! so an inconsistent combination cannot be expressed.
//!
//! ```
//! use trade_winds::core::{GameMode, MovementRules, Ruleset};
//!
//! let rules = Ruleset::regular()
//!     .with_movement_rules(MovementRules::Budgetted)
//!     .with_game_winning_difference(20);
//!
//! assert_eq!(rules.mode, GameMode::Regular);
//! assert!(rules.mode.piracy());
//! assert!(rules.validate().is_ok());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::board::TileBack;

/// Which edition of the rules is in play.
///
/// Modes are additive: Regular adds land tiles, piracy, disasters and
/// dispossession to Beginner. Advanced currently plays as Regular.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Beginner,
    Regular,
    Advanced,
}

impl GameMode {
    /// Whether a land-backed tile pile is in play.
    #[must_use]
    pub const fn land_tiles(self) -> bool {
        !matches!(self, GameMode::Beginner)
    }

    /// Whether Adventurers may attack and become pirates.
    #[must_use]
    pub const fn piracy(self) -> bool {
        !matches!(self, GameMode::Beginner)
    }

    /// Whether disaster tiles can appear in the decks.
    #[must_use]
    pub const fn disasters(self) -> bool {
        !matches!(self, GameMode::Beginner)
    }

    /// Whether an empty Chest raises the land and upwind move caps.
    #[must_use]
    pub const fn unburdened_movement(self) -> bool {
        !matches!(self, GameMode::Beginner)
    }
}

impl FromStr for GameMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(GameMode::Beginner),
            "regular" => Ok(GameMode::Regular),
            "advanced" => Ok(GameMode::Advanced),
            _ => Err(EngineError::UnknownGameMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameMode::Beginner => "beginner",
            GameMode::Regular => "regular",
            GameMode::Advanced => "advanced",
        };
        f.write_str(name)
    }
}

/// How movement budgets are spent between rests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementRules {
    /// Land and upwind moves are only possible early after a rest.
    Initial,
    /// Land and upwind moves each draw on their own budget at any time.
    Budgetted,
}

impl FromStr for MovementRules {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "initial" => Ok(MovementRules::Initial),
            "budgetted" => Ok(MovementRules::Budgetted),
            _ => Err(EngineError::UnknownMovementRules(s.to_string())),
        }
    }
}

/// Which rotations are tried when fitting a freshly drawn tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExplorationRules {
    /// No rotation, then one step each way.
    Clockwise,
    /// No rotation, then the single step that keeps the wind flowing
    /// head-to-tail along the direction of travel.
    Continuous,
}

impl FromStr for ExplorationRules {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "clockwise" => Ok(ExplorationRules::Clockwise),
            "continuous" => Ok(ExplorationRules::Continuous),
            _ => Err(EngineError::UnknownExplorationRules(s.to_string())),
        }
    }
}

/// Reward for filling a gap, indexed `[adjacent water edges][adjacent land edges]`.
pub type FillGapTable = [[u32; 5]; 5];

/// The default table: two per known adjoining edge of either kind.
#[must_use]
pub fn default_fill_gap_table() -> FillGapTable {
    let mut table = [[0; 5]; 5];
    for (water, row) in table.iter_mut().enumerate() {
        for (land, value) in row.iter_mut().enumerate() {
            *value = 2 * land as u32 + 2 * water as u32;
        }
    }
    table
}

/// Every tunable number and rule variant of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    pub mode: GameMode,
    pub movement_rules: MovementRules,
    pub exploration_rules: ExplorationRules,

    /// Tiles sampled into each pile at setup.
    pub num_water_tiles: usize,
    pub num_land_tiles: usize,

    /// Vault margin over the runner-up that wins the game.
    pub game_winning_difference: u32,

    pub max_adventurers: usize,
    pub max_agents: usize,

    pub value_discover_wonder: u32,
    pub value_trade: u32,
    /// Paid to another player's Agent when an Adventurer trades on its tile.
    pub value_agent_trade: u32,
    pub value_fill_map_gap: FillGapTable,
    /// Banked by whoever draws on an exhausted pile.
    pub value_complete_map: u32,

    pub cost_adventurer: u32,
    pub cost_agent_exploring: u32,
    pub cost_agent_from_city: u32,
    pub cost_agent_rest: u32,

    pub max_exploration_attempts: u32,
    /// Hard ceiling on moves between rests, in either movement mode.
    pub max_downwind_moves: u32,
    pub max_land_moves: u32,
    pub max_upwind_moves: u32,
    /// Caps applied instead when the Chest is empty (Regular and up).
    pub max_land_moves_unburdened: u32,
    pub max_upwind_moves_unburdened: u32,

    pub value_arrest: u32,
    pub value_dispossess_agent: u32,
    pub cost_agent_restore: u32,
    pub attack_success_prob: f64,

    /// Taxicab radius around a city inside which discovery becomes trade
    /// and Agents cannot be placed.
    pub city_domain_radius: u32,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::beginner()
    }
}

impl Ruleset {
    /// Water tiles only, no piracy.
    #[must_use]
    pub fn beginner() -> Self {
        Self {
            mode: GameMode::Beginner,
            movement_rules: MovementRules::Initial,
            exploration_rules: ExplorationRules::Continuous,
            num_water_tiles: 60,
            num_land_tiles: 0,
            game_winning_difference: 15,
            max_adventurers: 3,
            max_agents: 4,
            value_discover_wonder: 1,
            value_trade: 1,
            value_agent_trade: 0,
            value_fill_map_gap: default_fill_gap_table(),
            value_complete_map: 10,
            cost_adventurer: 10,
            cost_agent_exploring: 1,
            cost_agent_from_city: 3,
            cost_agent_rest: 1,
            max_exploration_attempts: 1,
            max_downwind_moves: 4,
            max_land_moves: 2,
            max_upwind_moves: 2,
            max_land_moves_unburdened: 2,
            max_upwind_moves_unburdened: 2,
            value_arrest: 3,
            value_dispossess_agent: 1,
            cost_agent_restore: 1,
            attack_success_prob: 1.0 / 3.0,
            city_domain_radius: 0,
        }
    }

    /// Land tiles, piracy, disasters and dispossession.
    #[must_use]
    pub fn regular() -> Self {
        Self {
            mode: GameMode::Regular,
            num_land_tiles: 40,
            ..Self::beginner()
        }
    }

    /// Plays as Regular; the equipment layer is not modelled.
    #[must_use]
    pub fn advanced() -> Self {
        Self {
            mode: GameMode::Advanced,
            ..Self::regular()
        }
    }

    /// Preset for `mode`.
    #[must_use]
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Beginner => Self::beginner(),
            GameMode::Regular => Self::regular(),
            GameMode::Advanced => Self::advanced(),
        }
    }

    /// Build a preset from rule identifiers such as
    /// `("regular", "budgetted", "clockwise")`.
    pub fn from_names(mode: &str, movement: &str, exploration: &str) -> Result<Self> {
        let ruleset = Self::for_mode(mode.parse()?)
            .with_movement_rules(movement.parse()?)
            .with_exploration_rules(exploration.parse()?);
        ruleset.validate()?;
        Ok(ruleset)
    }

    /// Reject values no game could be played with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.attack_success_prob) {
            return Err(EngineError::InvalidConfig(format!(
                "attack success probability {} is outside [0, 1]",
                self.attack_success_prob
            )));
        }
        if self.max_downwind_moves == 0 {
            return Err(EngineError::InvalidConfig(
                "max_downwind_moves must be at least 1".to_string(),
            ));
        }
        if self.max_adventurers == 0 {
            return Err(EngineError::InvalidConfig(
                "max_adventurers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Tiles sampled into the pile with the given back.
    #[must_use]
    pub fn num_tiles(&self, back: TileBack) -> usize {
        match back {
            TileBack::Water => self.num_water_tiles,
            TileBack::Land => self.num_land_tiles,
        }
    }

    /// Backs that have a pile in this mode.
    #[must_use]
    pub fn tile_backs(&self) -> &'static [TileBack] {
        if self.mode.land_tiles() {
            &[TileBack::Water, TileBack::Land]
        } else {
            &[TileBack::Water]
        }
    }

    /// Exploration reward for a gap, clamped to the table bounds.
    #[must_use]
    pub fn fill_gap_value(&self, water: usize, land: usize) -> u32 {
        self.value_fill_map_gap[water.min(4)][land.min(4)]
    }

    #[must_use]
    pub fn with_movement_rules(mut self, rules: MovementRules) -> Self {
        self.movement_rules = rules;
        self
    }

    #[must_use]
    pub fn with_exploration_rules(mut self, rules: ExplorationRules) -> Self {
        self.exploration_rules = rules;
        self
    }

    #[must_use]
    pub fn with_game_winning_difference(mut self, difference: u32) -> Self {
        self.game_winning_difference = difference;
        self
    }

    #[must_use]
    pub fn with_num_tiles(mut self, back: TileBack, count: usize) -> Self {
        match back {
            TileBack::Water => self.num_water_tiles = count,
            TileBack::Land => self.num_land_tiles = count,
        }
        self
    }

    #[must_use]
    pub fn with_fill_gap_table(mut self, table: FillGapTable) -> Self {
        self.value_fill_map_gap = table;
        self
    }

    #[must_use]
    pub fn with_attack_success_prob(mut self, probability: f64) -> Self {
        self.attack_success_prob = probability;
        self
    }

    #[must_use]
    pub fn with_exploration_attempts(mut self, attempts: u32) -> Self {
        self.max_exploration_attempts = attempts;
        self
    }

    /// Set the downwind, land and upwind caps together.
    #[must_use]
    pub fn with_move_limits(mut self, downwind: u32, land: u32, upwind: u32) -> Self {
        self.max_downwind_moves = downwind;
        self.max_land_moves = land;
        self.max_upwind_moves = upwind;
        self
    }

    #[must_use]
    pub fn with_unburdened_limits(mut self, land: u32, upwind: u32) -> Self {
        self.max_land_moves_unburdened = land;
        self.max_upwind_moves_unburdened = upwind;
        self
    }

    #[must_use]
    pub fn with_city_domain_radius(mut self, radius: u32) -> Self {
        self.city_domain_radius = radius;
        self
    }

    #[must_use]
    pub fn with_max_agents(mut self, max: usize) -> Self {
        self.max_agents = max;
        self
    }

    #[must_use]
    pub fn with_max_adventurers(mut self, max: usize) -> Self {
        self.max_adventurers = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_constants() {
        let rules = Ruleset::beginner();
        assert_eq!(rules.num_water_tiles, 60);
        assert_eq!(rules.game_winning_difference, 15);
        assert_eq!(rules.cost_adventurer, 10);
        assert_eq!(rules.max_downwind_moves, 4);
        assert_eq!(rules.tile_backs(), &[TileBack::Water]);
        assert!(!rules.mode.piracy());
    }

    #[test]
    fn test_regular_adds_land_and_piracy() {
        let rules = Ruleset::regular();
        assert_eq!(rules.num_tiles(TileBack::Land), 40);
        assert_eq!(rules.tile_backs(), &[TileBack::Water, TileBack::Land]);
        assert!(rules.mode.piracy());
        assert!(rules.mode.disasters());
        assert!((rules.attack_success_prob - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_gap_table() {
        let rules = Ruleset::beginner();
        assert_eq!(rules.fill_gap_value(0, 0), 0);
        assert_eq!(rules.fill_gap_value(2, 1), 6);
        assert_eq!(rules.fill_gap_value(4, 0), 8);
        assert_eq!(rules.fill_gap_value(9, 9), 16);
    }

    #[test]
    fn test_from_names() {
        let rules = Ruleset::from_names("Regular", "budgetted", "clockwise").unwrap();
        assert_eq!(rules.mode, GameMode::Regular);
        assert_eq!(rules.movement_rules, MovementRules::Budgetted);
        assert_eq!(rules.exploration_rules, ExplorationRules::Clockwise);

        assert_eq!(
            Ruleset::from_names("regular", "sideways", "clockwise"),
            Err(EngineError::UnknownMovementRules("sideways".to_string()))
        );
        assert_eq!(
            Ruleset::from_names("regular", "initial", "spiral"),
            Err(EngineError::UnknownExplorationRules("spiral".to_string()))
        );
        assert!(matches!(
            Ruleset::from_names("expert", "initial", "clockwise"),
            Err(EngineError::UnknownGameMode(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Ruleset::regular().validate().is_ok());
        assert!(Ruleset::regular()
            .with_attack_success_prob(1.5)
            .validate()
            .is_err());
        assert!(Ruleset::beginner()
            .with_move_limits(0, 0, 0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_serialization() {
        let rules = Ruleset::advanced().with_city_domain_radius(2);
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: Ruleset = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
