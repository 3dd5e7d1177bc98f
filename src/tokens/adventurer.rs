//! Adventurer tokens.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AdventurerId, AgentId, MoveRecord, PlayerId, TileId};

/// A player's travelling token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adventurer {
    pub id: AdventurerId,
    pub player: PlayerId,
    pub tile: TileId,
    /// The Chest.
    pub wealth: u32,

    pub land_moves: u32,
    pub upwind_moves: u32,
    pub downwind_moves: u32,
    /// Number of game turns this Adventurer has completed.
    pub turns_moved: u32,

    /// Tiles entered since last leaving a city.
    pub route: Vec<TileId>,
    pub latest_city: TileId,
    /// Wonders already traded at since the last city visit.
    pub wonders_visited: SmallVec<[TileId; 8]>,
    /// Agents that may not rest this Adventurer again this turn.
    pub agents_rested: SmallVec<[AgentId; 4]>,
    pub pirate: bool,

    /// What happened during the latest move or wait.
    pub record: MoveRecord,
}

impl Adventurer {
    /// A fresh Adventurer standing on `city`.
    #[must_use]
    pub fn new(id: AdventurerId, player: PlayerId, city: TileId) -> Self {
        Self {
            id,
            player,
            tile: city,
            wealth: 0,
            land_moves: 0,
            upwind_moves: 0,
            downwind_moves: 0,
            turns_moved: 0,
            route: vec![city],
            latest_city: city,
            wonders_visited: SmallVec::new(),
            agents_rested: SmallVec::new(),
            pirate: false,
            record: MoveRecord::default(),
        }
    }

    /// Moves of any kind since the last rest.
    #[must_use]
    pub fn moves_since_rest(&self) -> u32 {
        self.land_moves + self.upwind_moves + self.downwind_moves
    }

    /// Whether the hard per-rest ceiling still leaves room to move.
    #[must_use]
    pub fn has_remaining_moves(&self, max_downwind_moves: u32) -> bool {
        self.moves_since_rest() < max_downwind_moves
    }

    pub fn reset_moves(&mut self) {
        self.land_moves = 0;
        self.upwind_moves = 0;
        self.downwind_moves = 0;
    }

    #[must_use]
    pub fn has_visited(&self, wonder: TileId) -> bool {
        self.wonders_visited.contains(&wonder)
    }

    #[must_use]
    pub fn has_rested_with(&self, agent: AgentId) -> bool {
        self.agents_rested.contains(&agent)
    }

    pub(crate) fn mark_rested_with(&mut self, agent: AgentId) {
        if !self.has_rested_with(agent) {
            self.agents_rested.push(agent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_adventurer_starts_at_city() {
        let adventurer = Adventurer::new(AdventurerId(0), PlayerId(1), TileId(0));
        assert_eq!(adventurer.tile, TileId(0));
        assert_eq!(adventurer.latest_city, TileId(0));
        assert_eq!(adventurer.route, vec![TileId(0)]);
        assert_eq!(adventurer.moves_since_rest(), 0);
        assert!(!adventurer.pirate);
    }

    #[test]
    fn test_move_budget() {
        let mut adventurer = Adventurer::new(AdventurerId(0), PlayerId(0), TileId(0));
        adventurer.land_moves = 2;
        adventurer.upwind_moves = 1;

        assert_eq!(adventurer.moves_since_rest(), 3);
        assert!(adventurer.has_remaining_moves(4));
        assert!(!adventurer.has_remaining_moves(3));

        adventurer.reset_moves();
        assert_eq!(adventurer.moves_since_rest(), 0);
    }

    #[test]
    fn test_rested_with_is_a_set() {
        let mut adventurer = Adventurer::new(AdventurerId(0), PlayerId(0), TileId(0));
        adventurer.mark_rested_with(AgentId(3));
        adventurer.mark_rested_with(AgentId(3));

        assert!(adventurer.has_rested_with(AgentId(3)));
        assert_eq!(adventurer.agents_rested.len(), 1);
    }
}
