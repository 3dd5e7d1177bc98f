//! What an Adventurer can do where it stands: trade at Wonders, rest and
//! collect with Agents, place Agents on fresh tiles, and end expeditions.

use crate::board::TileKind;
use crate::core::{AdventurerId, AgentId, EngineError, GameEvent, Result, TileId};
use crate::decision::DecisionMaker;
use crate::game::Game;

impl Game {
    /// First arrival on a freshly explored tile.
    ///
    /// Cities are discovered and visited. Wonders pay their discovery value,
    /// or trade value inside a city's domain. Afterwards the explorer may
    /// station an Agent.
    pub(crate) fn discover(
        &mut self,
        id: AdventurerId,
        tile: TileId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<()> {
        let (is_city, is_wonder, position) = {
            let t = self.board.tile(tile)?;
            (t.is_city(), t.is_wonder(), self.board.position_of(tile)?)
        };

        if is_city {
            if let TileKind::City { discovered, .. } = &mut self.board.tile_mut(tile)?.kind {
                *discovered = true;
            }
            return self.visit_city(id, tile, false, decider);
        }

        if is_wonder {
            if self.in_city_domain(position) {
                self.trade(id, tile)?;
            } else {
                let value = self.ruleset.value_discover_wonder;
                let adventurer = self.adventurer_mut(id)?;
                adventurer.wealth += value;
                adventurer.wonders_visited.push(tile);
                self.record(GameEvent::WonderDiscovered {
                    adventurer: id,
                    tile,
                    value,
                });
            }
        }

        self.place_agent(id, decider)?;
        Ok(())
    }

    /// Trade at the Wonder under the Adventurer. Each Wonder trades once per
    /// expedition. Another player's Agent on the Wonder takes a cut.
    pub fn trade(&mut self, id: AdventurerId, tile: TileId) -> Result<bool> {
        let piracy = self.ruleset.mode.piracy();
        let adventurer = self.adventurer(id)?;
        if (piracy && adventurer.pirate) || adventurer.tile != tile || adventurer.has_visited(tile) {
            return Ok(false);
        }
        let player = adventurer.player;
        if !self.board.tile(tile)?.is_wonder() {
            return Ok(false);
        }

        let value = self.ruleset.value_trade;
        let adventurer = self.adventurer_mut(id)?;
        adventurer.wealth += value;
        adventurer.wonders_visited.push(tile);
        adventurer.record.traded = true;

        if let Some(agent_id) = self.board.tile(tile)?.agent {
            let cut = self.ruleset.value_agent_trade;
            let agent = self.agent_mut(agent_id)?;
            if agent.player != player && agent.is_active() {
                agent.wealth += cut;
            }
        }

        tracing::debug!(adventurer = %id, %tile, value, "traded");
        self.record(GameEvent::Traded {
            adventurer: id,
            tile,
            value,
        });
        Ok(true)
    }

    /// Whether `agent` would rest this Adventurer now.
    pub fn can_rest(&self, id: AdventurerId, agent: AgentId) -> Result<bool> {
        let adventurer = self.adventurer(id)?;
        let agent = self.agent(agent)?;
        if agent.tile != Some(adventurer.tile)
            || !agent.is_active()
            || adventurer.has_rested_with(agent.id)
        {
            return Ok(false);
        }
        let own = agent.player == adventurer.player;
        if self.ruleset.mode.piracy() && adventurer.pirate && !own {
            return Ok(false);
        }
        Ok(own || adventurer.wealth >= self.ruleset.cost_agent_rest)
    }

    /// Rest with the Agent on the current tile, refilling every move budget.
    /// Resting with another player's Agent costs a fee that the Agent keeps.
    pub fn rest(&mut self, id: AdventurerId) -> Result<bool> {
        let Some(agent_id) = self.adventurer_tile(id)?.agent else {
            return Ok(false);
        };
        if !self.can_rest(id, agent_id)? {
            return Ok(false);
        }

        let player = self.adventurer(id)?.player;
        let fee = if self.agent(agent_id)?.player == player {
            0
        } else {
            self.ruleset.cost_agent_rest
        };
        self.agent_mut(agent_id)?.wealth += fee;

        let adventurer = self.adventurer_mut(id)?;
        adventurer.wealth -= fee;
        adventurer.reset_moves();
        adventurer.mark_rested_with(agent_id);
        adventurer.record.rested = true;

        tracing::debug!(adventurer = %id, agent = %agent_id, fee, "rested");
        self.record(GameEvent::Rested {
            adventurer: id,
            agent: agent_id,
            fee,
        });
        Ok(true)
    }

    /// Take whatever the own Agent on the current tile is holding.
    pub fn collect_wealth(&mut self, id: AdventurerId) -> Result<bool> {
        let Some(agent_id) = self.adventurer_tile(id)?.agent else {
            return Ok(false);
        };
        let player = self.adventurer(id)?.player;
        let agent = self.agent_mut(agent_id)?;
        if agent.player != player || agent.dispossessed || agent.wealth == 0 {
            return Ok(false);
        }
        let amount = std::mem::take(&mut agent.wealth);

        let adventurer = self.adventurer_mut(id)?;
        adventurer.wealth += amount;
        adventurer.record.collected = true;
        self.record(GameEvent::WealthCollected {
            adventurer: id,
            agent: agent_id,
            amount,
        });
        Ok(true)
    }

    /// Whether this Adventurer's player could station an Agent on `tile`.
    ///
    /// Never on cities, disasters or inside a city domain, and never over an
    /// active Agent. Pirates cannot hire in piracy modes.
    pub fn check_tile_available(&self, id: AdventurerId, tile: TileId) -> Result<bool> {
        if self.ruleset.mode.piracy() && self.adventurer(id)?.pirate {
            return Ok(false);
        }
        let t = self.board.tile(tile)?;
        let Some(position) = t.position else {
            return Ok(false);
        };
        if t.is_city() || t.is_disaster() || self.in_city_domain(position) {
            return Ok(false);
        }
        match t.agent {
            None => Ok(true),
            Some(agent) => Ok(self.agent(agent)?.dispossessed),
        }
    }

    /// Offer to station an Agent on the current tile, paid from the Chest.
    ///
    /// Once the player holds the maximum number of Agents, the decider picks
    /// one of theirs to move instead.
    pub(crate) fn place_agent(
        &mut self,
        id: AdventurerId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<bool> {
        let adventurer = self.adventurer_mut(id)?;
        adventurer.record.placed = false;
        let (player, tile, chest) = (adventurer.player, adventurer.tile, adventurer.wealth);
        let cost = self.ruleset.cost_agent_exploring;

        if chest < cost
            || !self.check_tile_available(id, tile)?
            || !decider.check_place_agent(self, id, tile)
        {
            return Ok(false);
        }

        let agent = if self.player_agents[player].len() >= self.ruleset.max_agents {
            let Some(agent) = decider.check_move_agent(self, id) else {
                return Ok(false);
            };
            if !self.player_agents[player].contains(&agent) {
                return Err(EngineError::UnknownAgent(agent));
            }
            self.station_agent(agent, tile)?;
            agent
        } else {
            self.spawn_agent(player, tile)?
        };

        let adventurer = self.adventurer_mut(id)?;
        adventurer.wealth -= cost;
        adventurer.mark_rested_with(agent);
        adventurer.record.placed = true;

        tracing::debug!(%player, %agent, %tile, "agent placed");
        self.record(GameEvent::AgentPlaced { player, agent, tile });
        Ok(true)
    }

    /// Pay to put a dispossessed Agent on the current tile back in service.
    pub fn restore_agent(&mut self, id: AdventurerId, agent: AgentId) -> Result<bool> {
        let cost = self.ruleset.cost_agent_restore;
        let tile = self.adventurer(id)?.tile;
        let restorable = {
            let a = self.agent(agent)?;
            a.dispossessed && a.tile == Some(tile)
        };
        let adventurer = self.adventurer_mut(id)?;
        adventurer.record.restored = false;
        if !restorable || adventurer.wealth < cost {
            return Ok(false);
        }

        adventurer.wealth -= cost;
        adventurer.mark_rested_with(agent);
        adventurer.record.restored = true;
        self.agent_mut(agent)?.dispossessed = false;
        self.record(GameEvent::AgentRestored {
            adventurer: id,
            agent,
        });
        Ok(true)
    }

    /// Offer trading at a Wonder under the Adventurer.
    pub(crate) fn interact_tile(
        &mut self,
        id: AdventurerId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<()> {
        let tile = self.adventurer(id)?.tile;
        if self.board.tile(tile)?.is_wonder() && decider.check_trade(self, id, tile) {
            self.trade(id, tile)?;
        }
        Ok(())
    }

    /// Offer everything the tokens sharing the tile allow: collecting and
    /// resting with Agents, restoring them, and attacking rivals.
    pub(crate) fn interact_tokens(
        &mut self,
        id: AdventurerId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<()> {
        let piracy = self.ruleset.mode.piracy();
        let (player, tile) = {
            let a = self.adventurer(id)?;
            (a.player, a.tile)
        };

        if let Some(agent_id) = self.board.tile(tile)?.agent {
            let agent = self.agent(agent_id)?;
            let (own, dispossessed, held) =
                (agent.player == player, agent.dispossessed, agent.wealth);

            if dispossessed {
                if piracy && decider.check_restore_agent(self, id, agent_id) {
                    self.restore_agent(id, agent_id)?;
                }
            } else if own {
                if held > 0 && decider.check_collect_wealth(self, id, agent_id) {
                    self.collect_wealth(id)?;
                }
                if self.can_rest(id, agent_id)? && decider.check_rest(self, id, agent_id) {
                    self.rest(id)?;
                }
            } else {
                let pirate = self.adventurer(id)?.pirate;
                if !pirate && self.can_rest(id, agent_id)? && decider.check_rest(self, id, agent_id)
                {
                    self.rest(id)?;
                }
                if piracy && decider.check_attack_agent(self, id, agent_id) {
                    self.attack(id, agent_id.into())?;
                }
            }
        }

        if piracy {
            let mut targets = Vec::new();
            for &other in &self.board.tile(tile)?.adventurers {
                let a = self.adventurer(other)?;
                if a.player != player && (a.wealth > 0 || a.pirate) {
                    targets.push(other);
                }
            }
            for target in targets {
                if decider.check_attack_adventurer(self, id, target) {
                    self.attack(id, target.into())?;
                }
            }
        }
        Ok(())
    }

    /// Send the Adventurer home to its latest city with an empty Chest.
    pub(crate) fn end_expedition(&mut self, id: AdventurerId) -> Result<()> {
        let city = self.adventurer(id)?.latest_city;
        self.teleport(id, city)?;
        let adventurer = self.adventurer_mut(id)?;
        adventurer.wealth = 0;
        adventurer.wonders_visited.clear();
        self.record(GameEvent::ExpeditionEnded {
            adventurer: id,
            city,
        });
        Ok(())
    }

    /// Give up the expedition: the Chest is left on the current tile and the
    /// Adventurer returns to its latest city, banking nothing and buying
    /// nothing there.
    pub fn abandon_expedition(
        &mut self,
        id: AdventurerId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<()> {
        let adventurer = self.adventurer_mut(id)?;
        let (tile, chest) = (adventurer.tile, std::mem::take(&mut adventurer.wealth));
        self.board.tile_mut(tile)?.dropped_wealth += chest;
        tracing::debug!(adventurer = %id, %tile, dropped = chest, "expedition abandoned");

        self.end_expedition(id)?;
        let city = self.adventurer(id)?.latest_city;
        self.visit_city(id, city, true, decider)
    }
}
