//! Identifiers for the things that live on the board.
//!
//! Tiles, Adventurers and Agents are stored in arenas owned by the
//! [`Game`](crate::game::Game) and referred to by small copyable ids.
//! Ids are allocated in creation order and never reused, so an id stays
//! valid for the whole game even after an Agent has been evicted.
//!
//! ```
//! use trade_winds::core::{AdventurerId, Token};
//!
//! let id = AdventurerId::new(3);
//! assert_eq!(id.index(), 3);
//! assert_eq!(Token::from(id), Token::Adventurer(id));
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a tile, whether placed on the board or still in a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile id from its arena index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index of this tile.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Identifier of an Adventurer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AdventurerId(pub u32);

impl AdventurerId {
    /// Create an Adventurer id from its arena index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index of this Adventurer.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for AdventurerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Adventurer({})", self.0)
    }
}

/// Identifier of an Agent token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Create an Agent id from its arena index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index of this Agent.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent({})", self.0)
    }
}

/// Any token that can stand on a tile.
///
/// Used where an operation accepts either kind, such as the target of an
/// attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Adventurer(AdventurerId),
    Agent(AgentId),
}

impl From<AdventurerId> for Token {
    fn from(id: AdventurerId) -> Self {
        Token::Adventurer(id)
    }
}

impl From<AgentId> for Token {
    fn from(id: AgentId) -> Self {
        Token::Agent(id)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Adventurer(id) => id.fmt(f),
            Token::Agent(id) => id.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_index() {
        assert_eq!(TileId::new(7).index(), 7);
        assert_eq!(AdventurerId::new(0).index(), 0);
        assert_eq!(AgentId::new(12).index(), 12);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TileId(4)), "Tile(4)");
        assert_eq!(format!("{}", AdventurerId(1)), "Adventurer(1)");
        assert_eq!(format!("{}", Token::Agent(AgentId(2))), "Agent(2)");
    }

    #[test]
    fn test_token_from() {
        let adventurer = AdventurerId::new(5);
        let agent = AgentId::new(5);

        assert_eq!(Token::from(adventurer), Token::Adventurer(adventurer));
        assert_eq!(Token::from(agent), Token::Agent(agent));
        assert_ne!(Token::from(adventurer), Token::from(agent));
    }

    #[test]
    fn test_serialization() {
        let token = Token::Adventurer(AdventurerId(9));
        let json = serde_json::to_string(&token).unwrap();
        let deserialized: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }
}
