//! The decision interface.
//!
//! The engine never chooses for a player. Whenever a rule offers a choice it
//! asks the acting player's [`DecisionMaker`] and carries on with the
//! answer. Every call is synchronous: how an implementation reaches its
//! answer (a heuristic, a human at a prompt, a network peer) is outside the
//! engine's concern.
//!
//! Only [`DecisionMaker::continue_turn`] is required. Every other method has
//! a default that declines the offer, except banking, which defaults to
//! depositing the whole Chest.
//!
//! ```
//! use trade_winds::core::{AdventurerId, Result};
//! use trade_winds::decision::DecisionMaker;
//! use trade_winds::game::Game;
//! use trade_winds::board::Compass;
//!
//! /// Sails north whenever it can, otherwise waits.
//! struct NorthBound;
//!
//! impl DecisionMaker for NorthBound {
//!     fn continue_turn(&mut self, game: &mut Game, adventurer: AdventurerId) -> Result<()> {
//!         if game.can_move(adventurer, Some(Compass::North))? {
//!             game.move_adventurer(adventurer, Compass::North, self)?;
//!         } else {
//!             game.wait(adventurer, self)?;
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use crate::core::{AdventurerId, AgentId, Result, TileId};
use crate::game::Game;

/// Chooses on behalf of one player.
///
/// The `game` handed to the `check_*` methods is read-only: answer from it,
/// never through it.
pub trait DecisionMaker {
    /// Take one step of an Adventurer's turn, by calling
    /// [`Game::move_adventurer`], [`Game::wait`] or another engine
    /// operation. The engine keeps calling until the turn is over and makes
    /// the Adventurer wait if a call does nothing.
    fn continue_turn(&mut self, game: &mut Game, adventurer: AdventurerId) -> Result<()>;

    /// Trade at the Wonder the Adventurer is standing on?
    fn check_trade(&mut self, _game: &Game, _adventurer: AdventurerId, _tile: TileId) -> bool {
        false
    }

    /// Rest with this Agent, paying its fee if it belongs to someone else?
    fn check_rest(&mut self, _game: &Game, _adventurer: AdventurerId, _agent: AgentId) -> bool {
        false
    }

    /// Take the wealth held by this own Agent?
    fn check_collect_wealth(
        &mut self,
        _game: &Game,
        _adventurer: AdventurerId,
        _agent: AgentId,
    ) -> bool {
        false
    }

    /// How much of the Chest to bank at a city. Answers above `max` are
    /// clamped.
    fn check_deposit(&mut self, _game: &Game, _adventurer: AdventurerId, max: u32) -> u32 {
        max
    }

    /// How much to withdraw from the Vault when setting out from a city.
    /// Answers above `max` are clamped.
    fn check_travel_money(&mut self, _game: &Game, _adventurer: AdventurerId, _max: u32) -> u32 {
        0
    }

    /// Buy another Adventurer at this city?
    fn check_buy_adventurer(&mut self, _game: &Game, _adventurer: AdventurerId) -> bool {
        false
    }

    /// Place an Agent on the freshly explored tile?
    fn check_place_agent(&mut self, _game: &Game, _adventurer: AdventurerId, _tile: TileId) -> bool {
        false
    }

    /// Where to send an Agent hired at this city, if anywhere.
    fn check_buy_agent(&mut self, _game: &Game, _adventurer: AdventurerId) -> Option<TileId> {
        None
    }

    /// Which existing Agent to relocate once the Agent cap is reached.
    fn check_move_agent(&mut self, _game: &Game, _adventurer: AdventurerId) -> Option<AgentId> {
        None
    }

    /// Attack this Adventurer sharing the tile?
    fn check_attack_adventurer(
        &mut self,
        _game: &Game,
        _adventurer: AdventurerId,
        _target: AdventurerId,
    ) -> bool {
        false
    }

    /// Attack this Agent sharing the tile?
    fn check_attack_agent(&mut self, _game: &Game, _adventurer: AdventurerId, _agent: AgentId) -> bool {
        false
    }

    /// Pay to restore this dispossessed Agent?
    fn check_restore_agent(
        &mut self,
        _game: &Game,
        _adventurer: AdventurerId,
        _agent: AgentId,
    ) -> bool {
        false
    }

    /// As a pirate on a disaster tile, gamble to recover its wealth?
    fn check_court_disaster(&mut self, _game: &Game, _adventurer: AdventurerId, _tile: TileId) -> bool {
        false
    }
}

/// Never moves: waits out every turn and banks everything at cities.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passive;

impl DecisionMaker for Passive {
    fn continue_turn(&mut self, game: &mut Game, adventurer: AdventurerId) -> Result<()> {
        game.wait(adventurer, self)?;
        Ok(())
    }
}
