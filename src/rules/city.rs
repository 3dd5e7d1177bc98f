//! City visits: banking, hiring and the end of an expedition's turn.

use crate::board::Position;
use crate::core::{AdventurerId, EngineError, GameEvent, Result, TileId};
use crate::decision::DecisionMaker;
use crate::game::Game;

impl Game {
    /// Whether `position` lies within the domain radius of a placed city.
    #[must_use]
    pub fn in_city_domain(&self, position: Position) -> bool {
        let radius = self.ruleset.city_domain_radius;
        self.cities.iter().any(|&city| {
            self.board
                .tile(city)
                .ok()
                .and_then(|tile| tile.position)
                .is_some_and(|at| at.distance(position) <= radius)
        })
    }

    /// Arrive at a city: clear piracy, bank, hire and end the turn.
    ///
    /// An abandoned expedition banks but hires nothing.
    pub(crate) fn visit_city(
        &mut self,
        id: AdventurerId,
        city: TileId,
        abandoned: bool,
        decider: &mut dyn DecisionMaker,
    ) -> Result<()> {
        let piracy = self.ruleset.mode.piracy();
        let adventurer = self.adventurer_mut(id)?;
        adventurer.latest_city = city;
        adventurer.wonders_visited.clear();
        if piracy {
            adventurer.pirate = false;
        }
        self.record(GameEvent::CityVisited {
            adventurer: id,
            city,
        });

        self.bank_wealth(id, decider)?;
        if !self.is_over() && !abandoned {
            self.buy_adventurers(id, city, decider)?;
            self.buy_agents(id, decider)?;
        }
        self.end_turn(id)
    }

    /// Move some or all of the Chest into the Vault.
    pub(crate) fn bank_wealth(
        &mut self,
        id: AdventurerId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<u32> {
        let chest = self.adventurer(id)?.wealth;
        let deposit = decider.check_deposit(self, id, chest).min(chest);

        let adventurer = self.adventurer_mut(id)?;
        adventurer.wealth -= deposit;
        adventurer.record.banked = deposit;
        let player = adventurer.player;
        self.vaults[player] += deposit;

        if deposit > 0 {
            tracing::debug!(%player, amount = deposit, vault = self.vaults[player], "banked");
            self.record(GameEvent::Banked {
                player,
                amount: deposit,
            });
        }
        self.check_win_conditions();
        Ok(deposit)
    }

    /// Hire Adventurers from the Vault while the decider wants them. New
    /// Adventurers start on this city and first move next turn.
    pub(crate) fn buy_adventurers(
        &mut self,
        id: AdventurerId,
        city: TileId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<u32> {
        let player = self.adventurer(id)?.player;
        let cost = self.ruleset.cost_adventurer;
        let mut bought = 0;

        while self.player_adventurers[player].len() < self.ruleset.max_adventurers
            && self.vaults[player] >= cost
            && decider.check_buy_adventurer(self, id)
        {
            self.vaults[player] -= cost;
            let hired = self.spawn_adventurer(player, city)?;
            self.adventurer_mut(hired)?.turns_moved = self.turn;
            bought += 1;
            tracing::debug!(%player, adventurer = %hired, "adventurer bought");
            self.record(GameEvent::AdventurerBought {
                player,
                adventurer: hired,
            });
        }

        self.adventurer_mut(id)?.record.bought_adventurers = bought;
        Ok(bought)
    }

    /// Hire Agents from the Vault and send them to tiles the decider names.
    /// Once at the Agent limit, each hire relocates an existing Agent.
    pub(crate) fn buy_agents(
        &mut self,
        id: AdventurerId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<u32> {
        let player = self.adventurer(id)?.player;
        let cost = self.ruleset.cost_agent_from_city;
        let mut bought = 0;
        let mut moved = None;

        while self.vaults[player] >= cost {
            let Some(tile) = decider.check_buy_agent(self, id) else {
                break;
            };
            if !self.check_tile_available(id, tile)? {
                break;
            }

            let agent = if self.player_agents[player].len() >= self.ruleset.max_agents {
                let Some(agent) = decider.check_move_agent(self, id) else {
                    break;
                };
                if !self.player_agents[player].contains(&agent) {
                    return Err(EngineError::UnknownAgent(agent));
                }
                self.station_agent(agent, tile)?;
                moved = Some(agent);
                agent
            } else {
                self.spawn_agent(player, tile)?
            };

            self.vaults[player] -= cost;
            bought += 1;
            tracing::debug!(%player, %agent, %tile, "agent bought");
            self.record(GameEvent::AgentPlaced {
                player,
                agent,
                tile,
            });
        }

        let record = &mut self.adventurer_mut(id)?.record;
        record.bought_agents = bought;
        record.moved_agent = moved;
        Ok(bought)
    }
}
