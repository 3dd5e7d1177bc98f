//! Core engine types: ids, players, RNG, ruleset, records and errors.
//!
//! Everything here is independent of the board geometry and of the rules
//! themselves; the rest of the crate builds on these building blocks.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::{AdventurerId, AgentId, TileId, Token};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::{GameRng, GameRngState};
pub use config::{
    default_fill_gap_table, ExplorationRules, FillGapTable, GameMode, MovementRules, Ruleset,
};
pub use action::{AttackRecord, EventRecord, GameEvent, MoveRecord, Step};
pub use error::{EngineError, Result};
