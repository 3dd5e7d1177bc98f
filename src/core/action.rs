//! Records of what happened.
//!
//! [`MoveRecord`] is the per-Adventurer summary of its latest move or wait,
//! reset at the start of each one. Decision makers read it to see what the
//! engine already offered during the current step.
//!
//! [`GameEvent`]s form the observation log: every significant transition is
//! appended to the game's history as an [`EventRecord`] tagged with the turn
//! it happened in.

use serde::{Deserialize, Serialize};

use super::entity::{AdventurerId, AgentId, TileId, Token};
use super::player::PlayerId;
use crate::board::{Compass, Position, TileBack};
use crate::game::WinType;

/// How an Adventurer spent its latest step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Move(Compass),
    Wait,
}

/// What an Adventurer did during its latest step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// `None` before the Adventurer's first step.
    pub step: Option<Step>,
    pub traded: bool,
    pub rested: bool,
    pub collected: bool,
    pub placed: bool,
    pub banked: u32,
    pub bought_adventurers: u32,
    pub bought_agents: u32,
    pub moved_agent: Option<AgentId>,
    pub attacked: u32,
    pub restored: bool,
}

impl MoveRecord {
    /// A fresh record for the given step.
    #[must_use]
    pub fn starting(step: Step) -> Self {
        Self {
            step: Some(step),
            ..Self::default()
        }
    }
}

/// A significant state transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TilePlaced {
        tile: TileId,
        position: Position,
    },
    Moved {
        adventurer: AdventurerId,
        direction: Compass,
        to: Position,
    },
    Waited {
        adventurer: AdventurerId,
    },
    ExplorationFailed {
        adventurer: AdventurerId,
        position: Position,
    },
    PileRefreshed {
        back: TileBack,
        tiles: usize,
    },
    MapCompleted {
        player: PlayerId,
        back: TileBack,
    },
    WonderDiscovered {
        adventurer: AdventurerId,
        tile: TileId,
        value: u32,
    },
    Traded {
        adventurer: AdventurerId,
        tile: TileId,
        value: u32,
    },
    Rested {
        adventurer: AdventurerId,
        agent: AgentId,
        fee: u32,
    },
    WealthCollected {
        adventurer: AdventurerId,
        agent: AgentId,
        amount: u32,
    },
    AgentPlaced {
        player: PlayerId,
        agent: AgentId,
        tile: TileId,
    },
    AgentEvicted {
        agent: AgentId,
        tile: TileId,
    },
    AgentRestored {
        adventurer: AdventurerId,
        agent: AgentId,
    },
    CityVisited {
        adventurer: AdventurerId,
        city: TileId,
    },
    Banked {
        player: PlayerId,
        amount: u32,
    },
    AdventurerBought {
        player: PlayerId,
        adventurer: AdventurerId,
    },
    Attacked {
        attacker: AdventurerId,
        target: Token,
        success: bool,
    },
    DisasterStruck {
        adventurer: AdventurerId,
        tile: TileId,
        dropped: u32,
    },
    DisasterCourted {
        adventurer: AdventurerId,
        tile: TileId,
        recovered: u32,
    },
    ExpeditionEnded {
        adventurer: AdventurerId,
        city: TileId,
    },
    GameOver {
        winner: Option<PlayerId>,
        win_type: WinType,
    },
}

/// A [`GameEvent`] stamped with the game turn it happened in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub turn: u32,
    pub event: GameEvent,
}

/// Outcome of one attack, kept for observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRecord {
    pub turn: u32,
    pub attacker: AdventurerId,
    pub tile: TileId,
    pub target: Token,
    pub success: bool,
}
