//! Agent tokens.

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, PlayerId, TileId};

/// A player's stationary token. Rests Adventurers and holds trade income.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub player: PlayerId,
    /// `None` once evicted from the board.
    pub tile: Option<TileId>,
    pub wealth: u32,
    /// Robbed by a pirate; no services until restored.
    pub dispossessed: bool,
}

impl Agent {
    /// A fresh Agent, not yet stationed on any tile.
    #[must_use]
    pub fn new(id: AgentId, player: PlayerId) -> Self {
        Self {
            id,
            player,
            tile: None,
            wealth: 0,
            dispossessed: false,
        }
    }

    /// On the board and not dispossessed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tile.is_some() && !self.dispossessed
    }
}
