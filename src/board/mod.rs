//! The board model: wind orientation, tiles, piles and the play area.
//!
//! ## Key Types
//!
//! - `Orientation` / `Edges`: wind arrow plus wind-relative edges
//! - `Tile`: a map tile and the tokens standing on it
//! - `TilePile` / `PilePair`: draw and discard piles per tile back
//! - `Board`: tile arena and sparse grid

pub mod orientation;
pub mod tile;
pub mod pile;
pub mod grid;

pub use orientation::{edge_at, is_downwind, relative_edge, Compass, Edges, Orientation, RelativeEdge};
pub use tile::{Position, Tile, TileBack, TileKind};
pub use pile::{PilePair, TilePile};
pub use grid::Board;
