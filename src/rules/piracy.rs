//! Attacks and disasters. Only active in modes with piracy and disasters.

use crate::core::{AdventurerId, AgentId, AttackRecord, GameEvent, Result, TileId, Token};
use crate::decision::DecisionMaker;
use crate::game::Game;

impl Game {
    /// Attack a token sharing the Adventurer's tile.
    ///
    /// Attacking a pirate is an arrest: on success the pirate loses its
    /// Chest and is sent home, and the attacker is paid a bounty. Attacking
    /// anyone else makes the attacker a pirate: a successful robbery takes
    /// half the target's Chest rounded up, and a successful raid on an Agent
    /// takes its wealth and dispossesses it.
    ///
    /// Returns whether the attack succeeded.
    pub fn attack(&mut self, id: AdventurerId, target: Token) -> Result<bool> {
        if !self.ruleset.mode.piracy() {
            return Ok(false);
        }
        let tile = self.adventurer(id)?.tile;
        let present = match target {
            Token::Adventurer(target_id) => {
                target_id != id && self.adventurer(target_id)?.tile == tile
            }
            Token::Agent(agent_id) => {
                let agent = self.agent(agent_id)?;
                !agent.dispossessed && agent.tile == Some(tile)
            }
        };
        if !present {
            return Ok(false);
        }
        self.adventurer_mut(id)?.record.attacked += 1;

        let success = match target {
            Token::Adventurer(target_id) => {
                if self.adventurer(target_id)?.pirate {
                    self.arrest(id, target_id)?
                } else {
                    self.rob(id, target_id)?
                }
            }
            Token::Agent(agent_id) => self.raid(id, agent_id)?,
        };

        let player = self.adventurer(id)?.player;
        self.attack_history[player].push(AttackRecord {
            turn: self.turn,
            attacker: id,
            tile,
            target,
            success,
        });
        tracing::debug!(attacker = %id, %target, success, "attack");
        self.record(GameEvent::Attacked {
            attacker: id,
            target,
            success,
        });
        Ok(success)
    }

    fn arrest(&mut self, id: AdventurerId, pirate: AdventurerId) -> Result<bool> {
        if !self.rng.roll(self.ruleset.attack_success_prob) {
            return Ok(false);
        }
        let bounty = self.ruleset.value_arrest;
        let attacker = self.adventurer_mut(id)?;
        attacker.wealth += bounty;
        attacker.pirate = false;

        let home = self.adventurer(pirate)?.latest_city;
        self.teleport(pirate, home)?;
        let defender = self.adventurer_mut(pirate)?;
        defender.wealth = 0;
        defender.pirate = false;
        defender.wonders_visited.clear();
        Ok(true)
    }

    fn rob(&mut self, id: AdventurerId, target: AdventurerId) -> Result<bool> {
        self.adventurer_mut(id)?.pirate = true;
        if !self.rng.roll(self.ruleset.attack_success_prob) {
            return Ok(false);
        }
        let defender = self.adventurer_mut(target)?;
        let stolen = defender.wealth.div_ceil(2);
        defender.wealth -= stolen;
        self.adventurer_mut(id)?.wealth += stolen;
        Ok(true)
    }

    fn raid(&mut self, id: AdventurerId, agent_id: AgentId) -> Result<bool> {
        self.adventurer_mut(id)?.pirate = true;
        if !self.rng.roll(self.ruleset.attack_success_prob) {
            return Ok(false);
        }
        let agent = self.agent_mut(agent_id)?;
        let taken = std::mem::take(&mut agent.wealth);
        agent.dispossessed = true;
        let bonus = self.ruleset.value_dispossess_agent;
        self.adventurer_mut(id)?.wealth += taken + bonus;
        Ok(true)
    }

    /// Step onto a disaster tile.
    ///
    /// Honest Adventurers drop their Chest on the tile and are sent home,
    /// losing the rest of the turn. Pirates survive, and may court the
    /// disaster for the wealth others left behind.
    pub(crate) fn enter_disaster(
        &mut self,
        id: AdventurerId,
        tile: TileId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<()> {
        if !self.disaster_tiles.contains(&tile) {
            self.disaster_tiles.push(tile);
        }

        if self.adventurer(id)?.pirate {
            if decider.check_court_disaster(self, id, tile) {
                self.court_disaster(id, tile)?;
            }
            return Ok(());
        }

        self.strike(id, tile)
    }

    /// Gamble on a disaster as a pirate: success recovers half its dropped
    /// wealth rounded up, failure strikes as for anyone else.
    pub fn court_disaster(&mut self, id: AdventurerId, tile: TileId) -> Result<bool> {
        if self.adventurer(id)?.tile != tile || !self.board.tile(tile)?.is_disaster() {
            return Ok(false);
        }
        let success = self.rng.roll(self.ruleset.attack_success_prob);
        let recovered = if success {
            let t = self.board.tile_mut(tile)?;
            let amount = t.dropped_wealth.div_ceil(2);
            t.dropped_wealth -= amount;
            self.adventurer_mut(id)?.wealth += amount;
            amount
        } else {
            0
        };
        self.record(GameEvent::DisasterCourted {
            adventurer: id,
            tile,
            recovered,
        });
        if !success {
            self.strike(id, tile)?;
        }
        Ok(success)
    }

    fn strike(&mut self, id: AdventurerId, tile: TileId) -> Result<()> {
        let dropped = std::mem::take(&mut self.adventurer_mut(id)?.wealth);
        self.board.tile_mut(tile)?.dropped_wealth += dropped;
        tracing::debug!(adventurer = %id, %tile, dropped, "struck by disaster");
        self.record(GameEvent::DisasterStruck {
            adventurer: id,
            tile,
            dropped,
        });
        self.end_expedition(id)?;
        self.end_turn(id)
    }
}
