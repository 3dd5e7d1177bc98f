//! # trade-winds
//!
//! A rules engine for Cartolan - Trade Winds, a tile-laying board game of
//! exploration and trade.
//!
//! ## Design Principles
//!
//! 1. **No Ambient State**: A [`Game`] owns its board, piles, tokens, Vaults,
//!    random source and event log. Every rule is a method on it.
//!
//! 2. **Arenas and Ids**: Tiles, Adventurers and Agents live in arenas and
//!    refer to each other by id, so the board, token residency and per-player
//!    registries never need shared ownership.
//!
//! 3. **Decisions Are Injected**: The engine never chooses for a player. It
//!    asks the [`DecisionMaker`] passed into each operation.
//!
//! 4. **Deterministic**: One seed fixes pile order and every random outcome.
//!
//! ## Modules
//!
//! - `core`: Ids, players, configuration, RNG, events and errors
//! - `board`: Compass and wind orientation, tiles, piles and the grid
//! - `tokens`: Adventurer and Agent data
//! - `rules`: Movement, exploration, trading, cities and piracy
//! - `game`: The game aggregate, setup, win conditions and the round loop
//! - `decision`: The decision interface
//!
//! ## Example
//!
//! ```
//! use trade_winds::{DecisionMaker, GameBuilder, Passive, Ruleset};
//!
//! let mut game = GameBuilder::new(Ruleset::beginner())
//!     .player_count(2)
//!     .build(42)
//!     .unwrap();
//! let mut deciders: Vec<Box<dyn DecisionMaker>> = vec![Box::new(Passive), Box::new(Passive)];
//!
//! let outcome = game.play_rounds(&mut deciders, 3).unwrap();
//! assert!(outcome.is_none());
//! assert_eq!(game.turn(), 3);
//! ```

pub mod board;
pub mod core;
pub mod decision;
pub mod game;
pub mod rules;
pub mod tokens;

// Re-export commonly used types
pub use crate::core::{
    AdventurerId, AgentId, EngineError, EventRecord, ExplorationRules, GameEvent, GameMode,
    GameRng, GameRngState, MovementRules, PlayerId, PlayerMap, Result, Ruleset, TileId, Token,
};

pub use crate::board::{Board, Compass, Edges, Orientation, Position, Tile, TileBack, TileKind};

pub use crate::tokens::{Adventurer, Agent};

pub use crate::rules::Exploration;

pub use crate::game::{DeckSpec, Game, GameBuilder, GameOutcome, GameStats, WinType};

pub use crate::decision::{DecisionMaker, Passive};
