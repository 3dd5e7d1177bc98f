//! Map tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::orientation::{edge_at, Compass, Edges, Orientation};
use crate::core::{AdventurerId, AgentId, TileId};

/// Grid coordinates. Longitude grows eastward, latitude northward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub longitude: i32,
    pub latitude: i32,
}

impl Position {
    #[must_use]
    pub const fn new(longitude: i32, latitude: i32) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// The capital's cell.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Cell one step toward `side`.
    #[must_use]
    pub const fn neighbour(self, side: Compass) -> Self {
        let (dx, dy) = side.offset();
        Self::new(self.longitude + dx, self.latitude + dy)
    }

    /// Taxicab distance.
    #[must_use]
    pub fn distance(self, other: Position) -> u32 {
        self.longitude.abs_diff(other.longitude) + self.latitude.abs_diff(other.latitude)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

/// The back of a tile, which decides the pile it is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileBack {
    Water,
    Land,
}

impl TileBack {
    pub const ALL: [TileBack; 2] = [TileBack::Water, TileBack::Land];

    /// Pile an exploration draws from when crossing an edge of this kind.
    #[must_use]
    pub const fn for_edge(water: bool) -> Self {
        if water {
            TileBack::Water
        } else {
            TileBack::Land
        }
    }
}

impl std::fmt::Display for TileBack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileBack::Water => f.write_str("water"),
            TileBack::Land => f.write_str("land"),
        }
    }
}

/// What a tile does when tokens arrive on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Plain,
    /// Pays for discovery once and for trade once per city visit.
    Wonder,
    /// Strips the Chest of non-pirates and sends them back to a city.
    Disaster,
    /// Banking and purchases. A mythical city starts undiscovered.
    City { capital: bool, discovered: bool },
}

impl TileKind {
    #[must_use]
    pub const fn is_city(self) -> bool {
        matches!(self, TileKind::City { .. })
    }
}

/// A tile, on the board or waiting in a pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub back: TileBack,
    pub kind: TileKind,
    pub orientation: Orientation,
    pub edges: Edges,
    /// Set once, when the tile is placed.
    pub position: Option<Position>,
    /// Wealth left behind by abandoned expeditions and disasters.
    pub dropped_wealth: u32,
    pub agent: Option<AgentId>,
    pub adventurers: SmallVec<[AdventurerId; 4]>,
}

impl Tile {
    /// A tile with its wind arrow pointing north-east.
    #[must_use]
    pub fn new(id: TileId, back: TileBack, kind: TileKind, edges: Edges) -> Self {
        Self {
            id,
            back,
            kind,
            orientation: Orientation::NorthEast,
            edges,
            position: None,
            dropped_wealth: 0,
            agent: None,
            adventurers: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn is_wonder(&self) -> bool {
        self.kind == TileKind::Wonder
    }

    #[must_use]
    pub fn is_disaster(&self) -> bool {
        self.kind == TileKind::Disaster
    }

    #[must_use]
    pub fn is_city(&self) -> bool {
        self.kind.is_city()
    }

    #[must_use]
    pub fn is_capital(&self) -> bool {
        matches!(self.kind, TileKind::City { capital: true, .. })
    }

    /// Whether the `side` edge is water under the current orientation.
    #[must_use]
    pub fn edge_water(&self, side: Compass) -> bool {
        edge_at(self.orientation, self.edges, side)
    }

    #[must_use]
    pub fn is_downwind(&self, side: Compass) -> bool {
        self.orientation.is_downwind(side)
    }

    pub fn rotate_clockwise(&mut self) {
        self.orientation = self.orientation.rotate_clockwise();
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.orientation = self.orientation.rotate_counterclockwise();
    }

    /// Whether every known neighbouring edge agrees with this tile's edge on
    /// the same side. `None` matches anything.
    #[must_use]
    pub fn fits(&self, adjoining: &[Option<bool>; 4]) -> bool {
        Compass::ALL.iter().all(|&side| match adjoining[side.index()] {
            Some(water) => water == self.edge_water(side),
            None => true,
        })
    }

    /// Hand over any dropped wealth, leaving none behind.
    pub fn take_dropped_wealth(&mut self) -> u32 {
        std::mem::take(&mut self.dropped_wealth)
    }

    pub(crate) fn remove_adventurer(&mut self, adventurer: AdventurerId) -> bool {
        let before = self.adventurers.len();
        self.adventurers.retain(|a| *a != adventurer);
        self.adventurers.len() != before
    }

    pub(crate) fn add_adventurer(&mut self, adventurer: AdventurerId) {
        if !self.adventurers.contains(&adventurer) {
            self.adventurers.push(adventurer);
        }
    }
}
