//! Building a game ready to play.
//!
//! [`GameBuilder`] lays out the capital and the four water tiles around it,
//! deals each tile back's pile from a [`DeckSpec`], and puts one Adventurer
//! per player on the capital.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::board::{Compass, Edges, Orientation, Position, TileBack, TileKind};
use crate::core::{EngineError, GameMode, PlayerId, Result, Ruleset};

/// How many tiles of one edge combination a deck holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCount {
    pub edges: Edges,
    pub total: usize,
    /// Of `total`, how many are Wonders.
    pub wonders: usize,
    /// Of `total`, how many are disasters. Plain tiles in modes without
    /// disasters.
    pub disasters: usize,
}

/// The full set of tiles a pile is sampled from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// One entry per edge combination.
    pub counts: Vec<EdgeCount>,
    /// Undiscovered cities mixed into the deck.
    pub mythical_cities: usize,
}

impl Default for DeckSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckSpec {
    /// A deck with no tiles.
    #[must_use]
    pub fn new() -> Self {
        Self::uniform(0)
    }

    /// `count` plain tiles of every edge combination.
    #[must_use]
    pub fn uniform(count: usize) -> Self {
        Self {
            counts: Edges::combinations()
                .map(|edges| EdgeCount {
                    edges,
                    total: count,
                    wonders: 0,
                    disasters: 0,
                })
                .collect(),
            mythical_cities: 0,
        }
    }

    /// Set the counts for one edge combination.
    #[must_use]
    pub fn with_count(mut self, edges: Edges, total: usize, wonders: usize, disasters: usize) -> Self {
        let entry = EdgeCount {
            edges,
            total: total.max(wonders + disasters),
            wonders,
            disasters,
        };
        match self.counts.iter_mut().find(|c| c.edges == edges) {
            Some(existing) => *existing = entry,
            None => self.counts.push(entry),
        }
        self
    }

    #[must_use]
    pub fn with_mythical_cities(mut self, count: usize) -> Self {
        self.mythical_cities = count;
        self
    }

    /// Water-backed deck, mostly open sea with coastline toward the corners.
    #[must_use]
    pub fn standard_water() -> Self {
        Self::graded(true, [30, 8, 3, 1, 0], 4, 2)
    }

    /// Land-backed deck, mostly interior with one mythical city.
    #[must_use]
    pub fn standard_land() -> Self {
        Self::graded(false, [20, 6, 3, 1, 0], 3, 2).with_mythical_cities(1)
    }

    /// Counts by how many edges differ from the deck's own terrain. Wonders
    /// sit on the uniform tiles and, one each, on tiles with a single odd
    /// edge. Disasters only on uniform tiles.
    fn graded(water: bool, by_odd_edges: [usize; 5], wonders: usize, disasters: usize) -> Self {
        let mut spec = Self::new();
        for count in &mut spec.counts {
            let e = count.edges;
            let odd = [
                e.upwind_clockwise,
                e.upwind_anticlockwise,
                e.downwind_clockwise,
                e.downwind_anticlockwise,
            ]
            .iter()
            .filter(|&&edge| edge != water)
            .count();
            count.total = by_odd_edges[odd];
            (count.wonders, count.disasters) = match odd {
                0 => (wonders, disasters),
                1 => (1, 0),
                _ => (0, 0),
            };
        }
        spec
    }

    /// Every tile the deck describes, for the given mode.
    fn tiles(&self, mode: GameMode) -> Vec<(TileKind, Edges)> {
        let mut tiles = Vec::new();
        for count in &self.counts {
            let disasters = if mode.disasters() { count.disasters } else { 0 };
            let plain = count.total.saturating_sub(count.wonders + disasters);
            tiles.extend(std::iter::repeat((TileKind::Wonder, count.edges)).take(count.wonders));
            tiles.extend(std::iter::repeat((TileKind::Disaster, count.edges)).take(disasters));
            tiles.extend(std::iter::repeat((TileKind::Plain, count.edges)).take(plain));
        }
        let city = TileKind::City {
            capital: false,
            discovered: false,
        };
        tiles.extend(std::iter::repeat((city, Edges::all_land())).take(self.mythical_cities));
        tiles
    }
}

/// Builder for a [`Game`] in its starting position.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    ruleset: Ruleset,
    player_count: usize,
    water_deck: DeckSpec,
    land_deck: DeckSpec,
}

impl GameBuilder {
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            player_count: 2,
            water_deck: DeckSpec::standard_water(),
            land_deck: DeckSpec::standard_land(),
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn water_deck(mut self, deck: DeckSpec) -> Self {
        self.water_deck = deck;
        self
    }

    pub fn land_deck(mut self, deck: DeckSpec) -> Self {
        self.land_deck = deck;
        self
    }

    /// Build the game. The seed fixes every pile's contents and order and
    /// every later random outcome.
    pub fn build(self, seed: u64) -> Result<Game> {
        let mut game = Game::new(self.ruleset, self.player_count, seed)?;

        let capital = game.add_tile(
            TileBack::Land,
            TileKind::City {
                capital: true,
                discovered: true,
            },
            Edges::all_water(),
            Orientation::NorthEast,
            Position::origin(),
        )?;
        for side in Compass::ALL {
            game.add_tile(
                TileBack::Water,
                TileKind::Plain,
                Edges::all_water(),
                Orientation::NorthEast,
                Position::origin().neighbour(side),
            )?;
        }

        for &back in game.ruleset.tile_backs() {
            let deck = match back {
                TileBack::Water => &self.water_deck,
                TileBack::Land => &self.land_deck,
            };
            let mut available = deck.tiles(game.ruleset.mode);
            if !game.ruleset.mode.land_tiles() {
                available.retain(|(kind, _)| !kind.is_city());
            }
            let wanted = game.ruleset.num_tiles(back);
            if available.len() < wanted {
                tracing::warn!(%back, wanted, available = available.len(), "deck smaller than pile");
            }
            let dealt = game.rng.sample(&available, wanted);
            for (kind, edges) in dealt {
                game.add_to_pile(back, kind, edges)?;
            }
            let pair = game
                .piles
                .get_mut(&back)
                .ok_or_else(|| EngineError::InvalidConfig(format!("no pile for {back} tiles")))?;
            pair.draw.shuffle(&mut game.rng);
        }

        for player in PlayerId::all(game.player_count) {
            game.spawn_adventurer(player, capital)?;
        }

        tracing::info!(
            seed,
            players = game.player_count,
            mode = %game.ruleset.mode,
            "game set up"
        );
        Ok(game)
    }
}
