//! Engine error type.
//!
//! Only construction problems and broken caller contracts are errors.
//! Gameplay refusals (not enough wealth, a Wonder already visited, a pirate
//! turned away) are reported as `Ok(false)` by the operation concerned, and
//! running out of tiles is a way for the game to end, not a failure.

use thiserror::Error;

use super::entity::{AdventurerId, AgentId, TileId};
use crate::board::{Position, TileBack};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid player count {0}: games seat 2 to 4 players")]
    InvalidPlayerCount(usize),

    #[error("unknown movement rules: {0:?}")]
    UnknownMovementRules(String),

    #[error("unknown exploration rules: {0:?}")]
    UnknownExplorationRules(String),

    #[error("unknown game mode: {0:?}")]
    UnknownGameMode(String),

    #[error("unknown compass direction: {0:?}")]
    InvalidDirection(String),

    #[error("invalid ruleset: {0}")]
    InvalidConfig(String),

    #[error("a tile is already placed at {position}")]
    CellOccupied { position: Position },

    #[error("{0} is already on the board")]
    TileAlreadyPlaced(TileId),

    #[error("{0} has not been placed on the board")]
    TileNotPlaced(TileId),

    #[error("{tile} already holds an active Agent")]
    AgentConflict { tile: TileId },

    #[error("a {found} tile cannot join the {expected} pile")]
    PileMismatch { expected: TileBack, found: TileBack },

    #[error("no such tile: {0}")]
    UnknownTile(TileId),

    #[error("no such Adventurer: {0}")]
    UnknownAdventurer(AdventurerId),

    #[error("no such Agent: {0}")]
    UnknownAgent(AgentId),

    #[error("expected one decision maker per player ({expected}), got {found}")]
    DeciderCountMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
