//! The play area.
//!
//! The [`Board`] owns every tile of the game, placed or not, in an arena
//! indexed by [`TileId`], plus a sparse index from grid position to the tile
//! placed there. A cell holds at most one tile and a placed tile never moves.

use rustc_hash::FxHashMap;

use super::orientation::Compass;
use super::tile::{Position, Tile, TileBack, TileKind};
use super::Edges;
use crate::core::{EngineError, Result, TileId};

/// Tile arena plus position index.
///
/// ```
/// use trade_winds::board::{Board, Edges, Position, TileBack, TileKind};
///
/// let mut board = Board::new();
/// let id = board.create_tile(TileBack::Water, TileKind::Plain, Edges::all_water());
/// board.place(id, Position::new(0, 0)).unwrap();
///
/// assert_eq!(board.tile_at(Position::new(0, 0)), Some(id));
/// assert!(board.place(id, Position::new(1, 0)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Board {
    tiles: Vec<Tile>,
    grid: FxHashMap<Position, TileId>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unplaced tile and return its id.
    pub fn create_tile(&mut self, back: TileBack, kind: TileKind, edges: Edges) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(Tile::new(id, back, kind, edges));
        id
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        self.tiles
            .get(id.index())
            .ok_or(EngineError::UnknownTile(id))
    }

    pub fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile> {
        self.tiles
            .get_mut(id.index())
            .ok_or(EngineError::UnknownTile(id))
    }

    /// Id of the tile placed at `position`.
    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<TileId> {
        self.grid.get(&position).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.grid.contains_key(&position)
    }

    /// Put a tile into an empty cell.
    ///
    /// Fails without touching the board if the cell is taken or the tile is
    /// already placed elsewhere.
    pub fn place(&mut self, id: TileId, position: Position) -> Result<()> {
        if self.grid.contains_key(&position) {
            return Err(EngineError::CellOccupied { position });
        }
        let tile = self
            .tiles
            .get_mut(id.index())
            .ok_or(EngineError::UnknownTile(id))?;
        if tile.position.is_some() {
            return Err(EngineError::TileAlreadyPlaced(id));
        }

        tile.position = Some(position);
        self.grid.insert(position, id);
        tracing::debug!(tile = %id, %position, orientation = %tile.orientation, "placed tile");
        Ok(())
    }

    /// Position of a placed tile.
    pub fn position_of(&self, id: TileId) -> Result<Position> {
        self.tile(id)?
            .position
            .ok_or(EngineError::TileNotPlaced(id))
    }

    /// Edges facing `position` from its placed neighbours, indexed
    /// `[N, E, S, W]`. `None` where no neighbour has been placed.
    #[must_use]
    pub fn adjoining_edges(&self, position: Position) -> [Option<bool>; 4] {
        let mut edges = [None; 4];
        for side in Compass::ALL {
            if let Some(id) = self.tile_at(position.neighbour(side)) {
                let neighbour = &self.tiles[id.index()];
                edges[side.index()] = Some(neighbour.edge_water(side.opposite()));
            }
        }
        edges
    }

    /// Every tile, placed or not, in creation order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Placed tiles, in no particular order.
    pub fn placed(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.grid.values().map(move |id| &self.tiles[id.index()])
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.grid.len()
    }

    /// Total tiles in the arena.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}
