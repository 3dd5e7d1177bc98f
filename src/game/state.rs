//! The game aggregate.
//!
//! A [`Game`] exclusively owns everything one game needs: the board and its
//! tile arena, a draw/discard pile pair per tile back, the token arenas and
//! per-player registries, Vault balances, the turn counter, cached win
//! statistics, the random source and the event log. Every engine operation
//! is a method on it, so no state is ever ambient.
//!
//! ## Observation
//!
//! Accessors such as [`Game::board`], [`Game::adventurer`] and
//! [`Game::history`] hand out shared references only. Collaborators that
//! render or log the game read through them and never mutate.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::win::GameOutcome;
use crate::board::{Board, Edges, Orientation, PilePair, Position, Tile, TileBack, TileKind};
use crate::core::{
    AdventurerId, AgentId, AttackRecord, EngineError, EventRecord, GameEvent, GameRng, PlayerId,
    PlayerMap, Result, Ruleset, TileId, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::tokens::{Adventurer, Agent};

/// Running totals, refreshed by every win-condition check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_vault_wealth: u32,
    pub total_chest_wealth: u32,
    /// Highest Vault balance.
    pub max_wealth: u32,
    /// Margin of the highest Vault over the next highest.
    pub wealth_difference: u32,
    /// Vault leader, if anyone has banked.
    pub leader: Option<PlayerId>,
    /// Wealth lying on known disaster tiles.
    pub dropped_wealth: u32,
    /// Drawn tiles that failed to fit and were discarded.
    pub exploration_attempts: u32,
    pub num_failed_explorations: u32,
}

/// One game of Cartolan.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) ruleset: Ruleset,
    pub(crate) player_count: usize,
    pub(crate) board: Board,
    pub(crate) piles: FxHashMap<TileBack, PilePair>,
    pub(crate) vaults: PlayerMap<u32>,
    pub(crate) adventurers: Vec<Adventurer>,
    pub(crate) agents: Vec<Agent>,
    pub(crate) player_adventurers: PlayerMap<Vec<AdventurerId>>,
    pub(crate) player_agents: PlayerMap<Vec<AgentId>>,
    pub(crate) cities: Vec<TileId>,
    pub(crate) disaster_tiles: Vec<TileId>,
    pub(crate) turn: u32,
    pub(crate) stats: GameStats,
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) rng: GameRng,
    pub(crate) history: Vector<EventRecord>,
    pub(crate) attack_history: PlayerMap<Vec<AttackRecord>>,
    /// Moves and waits performed, so the turn loop can spot a stalled turn.
    pub(crate) actions: u64,
}

impl Game {
    /// An empty game: no tiles, no tokens, empty piles for every tile back
    /// the ruleset uses.
    ///
    /// Most callers want [`GameBuilder`](super::GameBuilder), which also lays
    /// out the capital and fills the piles.
    pub fn new(ruleset: Ruleset, player_count: usize, seed: u64) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(EngineError::InvalidPlayerCount(player_count));
        }
        ruleset.validate()?;

        let piles = ruleset
            .tile_backs()
            .iter()
            .map(|&back| (back, PilePair::new(back)))
            .collect();

        Ok(Self {
            ruleset,
            player_count,
            board: Board::new(),
            piles,
            vaults: PlayerMap::with_value(player_count, 0),
            adventurers: Vec::new(),
            agents: Vec::new(),
            player_adventurers: PlayerMap::with_default(player_count),
            player_agents: PlayerMap::with_default(player_count),
            cities: Vec::new(),
            disaster_tiles: Vec::new(),
            turn: 0,
            stats: GameStats::default(),
            outcome: None,
            rng: GameRng::new(seed),
            history: Vector::new(),
            attack_history: PlayerMap::with_default(player_count),
            actions: 0,
        })
    }

    // === Observation ===

    #[must_use]
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Piles for a tile back, if that back is in play.
    #[must_use]
    pub fn piles(&self, back: TileBack) -> Option<&PilePair> {
        self.piles.get(&back)
    }

    #[must_use]
    pub fn vault(&self, player: PlayerId) -> u32 {
        self.vaults[player]
    }

    pub fn adventurer(&self, id: AdventurerId) -> Result<&Adventurer> {
        self.adventurers
            .get(id.index())
            .ok_or(EngineError::UnknownAdventurer(id))
    }

    pub fn agent(&self, id: AgentId) -> Result<&Agent> {
        self.agents
            .get(id.index())
            .ok_or(EngineError::UnknownAgent(id))
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        self.board.tile(id)
    }

    /// The tile an Adventurer stands on.
    pub fn adventurer_tile(&self, id: AdventurerId) -> Result<&Tile> {
        self.board.tile(self.adventurer(id)?.tile)
    }

    #[must_use]
    pub fn adventurers_of(&self, player: PlayerId) -> &[AdventurerId] {
        &self.player_adventurers[player]
    }

    /// Agents a player still has on the board.
    #[must_use]
    pub fn agents_of(&self, player: PlayerId) -> &[AgentId] {
        &self.player_agents[player]
    }

    /// Every Adventurer in creation order.
    pub fn all_adventurers(&self) -> impl Iterator<Item = &Adventurer> {
        self.adventurers.iter()
    }

    /// Every Agent ever placed, evicted ones included.
    pub fn all_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    #[must_use]
    pub fn cities(&self) -> &[TileId] {
        &self.cities
    }

    /// Disaster tiles that have been entered at least once.
    #[must_use]
    pub fn disaster_tiles(&self) -> &[TileId] {
        &self.disaster_tiles
    }

    /// Current game turn. Turn 0 is setup; the first round plays turn 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    #[must_use]
    pub fn attack_history(&self, player: PlayerId) -> &[AttackRecord] {
        &self.attack_history[player]
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Scenario setup ===

    /// Overwrite a player's Vault.
    pub fn set_vault(&mut self, player: PlayerId, wealth: u32) {
        self.vaults[player] = wealth;
    }

    pub fn adventurer_mut(&mut self, id: AdventurerId) -> Result<&mut Adventurer> {
        self.adventurers
            .get_mut(id.index())
            .ok_or(EngineError::UnknownAdventurer(id))
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Result<&mut Agent> {
        self.agents
            .get_mut(id.index())
            .ok_or(EngineError::UnknownAgent(id))
    }

    pub fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile> {
        self.board.tile_mut(id)
    }

    /// Create a tile and place it straight onto the board.
    pub fn add_tile(
        &mut self,
        back: TileBack,
        kind: TileKind,
        edges: Edges,
        orientation: Orientation,
        position: Position,
    ) -> Result<TileId> {
        if self.board.is_occupied(position) {
            return Err(EngineError::CellOccupied { position });
        }
        let id = self.board.create_tile(back, kind, edges);
        self.board.tile_mut(id)?.orientation = orientation;
        self.place_tile(id, position)?;
        Ok(id)
    }

    /// Create a tile and put it on top of its back's draw pile.
    pub fn add_to_pile(&mut self, back: TileBack, kind: TileKind, edges: Edges) -> Result<TileId> {
        let id = self.board.create_tile(back, kind, edges);
        let tile = self.board.tile(id)?;
        self.piles
            .entry(back)
            .or_insert_with(|| PilePair::new(back))
            .draw
            .add(tile)?;
        Ok(id)
    }

    /// Put a new Adventurer for `player` on `city`.
    pub fn spawn_adventurer(&mut self, player: PlayerId, city: TileId) -> Result<AdventurerId> {
        let id = AdventurerId(self.adventurers.len() as u32);
        self.board.tile_mut(city)?.add_adventurer(id);
        self.adventurers.push(Adventurer::new(id, player, city));
        self.player_adventurers[player].push(id);
        Ok(id)
    }

    /// Put a new Agent for `player` on `tile`.
    pub fn spawn_agent(&mut self, player: PlayerId, tile: TileId) -> Result<AgentId> {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(Agent::new(id, player));
        if let Err(err) = self.station_agent(id, tile) {
            self.agents.pop();
            return Err(err);
        }
        self.player_agents[player].push(id);
        Ok(id)
    }

    // === Token residency ===

    /// Place a tile, registering it as a city if it is one.
    pub(crate) fn place_tile(&mut self, id: TileId, position: Position) -> Result<()> {
        self.board.place(id, position)?;
        if self.board.tile(id)?.is_city() && !self.cities.contains(&id) {
            self.cities.push(id);
        }
        self.record(GameEvent::TilePlaced { tile: id, position });
        Ok(())
    }

    /// Take an Adventurer off its tile. Leaving a city starts a new route
    /// from that city.
    pub(crate) fn leave_tile(&mut self, id: AdventurerId) -> Result<()> {
        let from = self.adventurer(id)?.tile;
        let tile = self.board.tile_mut(from)?;
        tile.remove_adventurer(id);
        let from_city = tile.is_city();
        if from_city {
            self.adventurer_mut(id)?.route = vec![from];
        }
        Ok(())
    }

    /// Put an Adventurer onto a tile, handing it any dropped wealth there.
    ///
    /// Disaster tiles keep their dropped wealth; see
    /// [`Game::enter_disaster`].
    pub(crate) fn enter_tile(&mut self, id: AdventurerId, to: TileId) -> Result<()> {
        let tile = self.board.tile_mut(to)?;
        tile.add_adventurer(id);
        let found = if tile.is_disaster() {
            0
        } else {
            tile.take_dropped_wealth()
        };

        let adventurer = self.adventurer_mut(id)?;
        adventurer.tile = to;
        adventurer.wealth += found;
        adventurer.route.push(to);
        Ok(())
    }

    /// Move an Adventurer straight to `to` without spending moves.
    pub(crate) fn teleport(&mut self, id: AdventurerId, to: TileId) -> Result<()> {
        self.leave_tile(id)?;
        self.enter_tile(id, to)
    }

    /// Put an Agent on a tile, taking it off any tile it was on.
    ///
    /// A dispossessed incumbent is evicted from the board and from its
    /// owner's registry. An active incumbent is a broken caller contract.
    pub(crate) fn station_agent(&mut self, id: AgentId, to: TileId) -> Result<()> {
        let incumbent = self.board.tile(to)?.agent;
        match incumbent {
            None => {}
            Some(other) if other == id => return Ok(()),
            Some(other) => {
                if !self.agent(other)?.dispossessed {
                    return Err(EngineError::AgentConflict { tile: to });
                }
                self.evict_agent(other)?;
            }
        }

        if let Some(from) = self.agent(id)?.tile {
            self.board.tile_mut(from)?.agent = None;
        }

        let tile = self.board.tile_mut(to)?;
        tile.agent = Some(id);
        let found = tile.take_dropped_wealth();

        let agent = self.agent_mut(id)?;
        agent.tile = Some(to);
        agent.dispossessed = false;
        agent.wealth += found;
        Ok(())
    }

    fn evict_agent(&mut self, id: AgentId) -> Result<()> {
        let agent = self.agent_mut(id)?;
        let player = agent.player;
        let tile = agent.tile.take();
        if let Some(tile) = tile {
            self.board.tile_mut(tile)?.agent = None;
            self.record(GameEvent::AgentEvicted { agent: id, tile });
        }
        self.player_agents[player].retain(|a| *a != id);
        tracing::debug!(agent = %id, %player, "evicted dispossessed agent");
        Ok(())
    }

    /// Append to the event log.
    pub(crate) fn record(&mut self, event: GameEvent) {
        self.history.push_back(EventRecord {
            turn: self.turn,
            event,
        });
    }
}
