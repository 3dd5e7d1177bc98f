//! Tile piles.
//!
//! Piles hold tile ids; the tiles themselves live in the
//! [`Board`](super::Board) arena. Drawing takes from the end of the pile and
//! adding appends, so the last tile added is the next one drawn.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileBack};
use crate::core::{EngineError, GameRng, Result, TileId};

/// An ordered stack of tiles sharing one back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePile {
    back: TileBack,
    tiles: Vec<TileId>,
}

impl TilePile {
    #[must_use]
    pub fn new(back: TileBack) -> Self {
        Self {
            back,
            tiles: Vec::new(),
        }
    }

    #[must_use]
    pub fn back(&self) -> TileBack {
        self.back
    }

    /// Put a tile on top, rejecting tiles with the wrong back.
    pub fn add(&mut self, tile: &Tile) -> Result<()> {
        if tile.back != self.back {
            return Err(EngineError::PileMismatch {
                expected: self.back,
                found: tile.back,
            });
        }
        self.tiles.push(tile.id);
        Ok(())
    }

    /// Take the top tile, if any.
    pub fn draw(&mut self) -> Option<TileId> {
        self.tiles.pop()
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles from bottom to top.
    #[must_use]
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }
}

/// A draw pile and the discard pile that feeds it once it runs dry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilePair {
    pub draw: TilePile,
    pub discard: TilePile,
}

impl PilePair {
    #[must_use]
    pub fn new(back: TileBack) -> Self {
        Self {
            draw: TilePile::new(back),
            discard: TilePile::new(back),
        }
    }

    #[must_use]
    pub fn back(&self) -> TileBack {
        self.draw.back()
    }

    /// No tiles left anywhere for this back.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }

    /// Turn a non-empty discard pile into the draw pile once the draw pile
    /// is empty, shuffling it and starting a fresh discard pile.
    ///
    /// Returns whether the swap happened.
    pub fn refresh(&mut self, rng: &mut GameRng) -> bool {
        if !self.draw.is_empty() || self.discard.is_empty() {
            return false;
        }
        let back = self.back();
        self.draw = std::mem::replace(&mut self.discard, TilePile::new(back));
        self.draw.shuffle(rng);
        true
    }
}
