//! Wind orientation and edge translation.
//!
//! Each tile carries a wind arrow pointing to one of four diagonals and four
//! edges described relative to that arrow. Rotating a tile only turns the
//! arrow; the relative [`Edges`] never change. Looking up what lies on an
//! absolute compass side is a pure function of the two, see [`edge_at`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// An absolute compass side of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    /// All four sides, in the order the engine tests them.
    pub const ALL: [Compass; 4] = [Compass::North, Compass::East, Compass::South, Compass::West];

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Compass::North => Compass::South,
            Compass::East => Compass::West,
            Compass::South => Compass::North,
            Compass::West => Compass::East,
        }
    }

    /// Grid step as (longitude, latitude). North increases latitude.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Compass::North => (0, 1),
            Compass::East => (1, 0),
            Compass::South => (0, -1),
            Compass::West => (-1, 0),
        }
    }

    /// Whether this side lies on the north-south axis.
    #[must_use]
    pub const fn is_meridional(self) -> bool {
        matches!(self, Compass::North | Compass::South)
    }

    /// Index into `[N, E, S, W]` arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Compass::North => 0,
            Compass::East => 1,
            Compass::South => 2,
            Compass::West => 3,
        }
    }
}

impl FromStr for Compass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Compass::North),
            "e" | "east" => Ok(Compass::East),
            "s" | "south" => Ok(Compass::South),
            "w" | "west" => Ok(Compass::West),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl std::fmt::Display for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Compass::North => "north",
            Compass::East => "east",
            Compass::South => "south",
            Compass::West => "west",
        };
        f.write_str(name)
    }
}

/// Direction of a tile's wind arrow.
///
/// ```
/// use trade_winds::board::Orientation;
///
/// let start = Orientation::NorthEast;
/// assert_eq!(start.rotate_clockwise(), Orientation::SouthEast);
/// assert_eq!(start.rotate_counterclockwise(), Orientation::NorthWest);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::NorthEast,
        Orientation::SouthEast,
        Orientation::SouthWest,
        Orientation::NorthWest,
    ];

    /// Build from the arrow's north and east components.
    #[must_use]
    pub const fn from_bits(north: bool, east: bool) -> Self {
        match (north, east) {
            (true, true) => Orientation::NorthEast,
            (false, true) => Orientation::SouthEast,
            (false, false) => Orientation::SouthWest,
            (true, false) => Orientation::NorthWest,
        }
    }

    #[must_use]
    pub const fn north(self) -> bool {
        matches!(self, Orientation::NorthEast | Orientation::NorthWest)
    }

    #[must_use]
    pub const fn east(self) -> bool {
        matches!(self, Orientation::NorthEast | Orientation::SouthEast)
    }

    /// NE -> SE -> SW -> NW -> NE.
    #[must_use]
    pub const fn rotate_clockwise(self) -> Self {
        match self {
            Orientation::NorthEast => Orientation::SouthEast,
            Orientation::SouthEast => Orientation::SouthWest,
            Orientation::SouthWest => Orientation::NorthWest,
            Orientation::NorthWest => Orientation::NorthEast,
        }
    }

    /// NE -> NW -> SW -> SE -> NE.
    #[must_use]
    pub const fn rotate_counterclockwise(self) -> Self {
        match self {
            Orientation::NorthEast => Orientation::NorthWest,
            Orientation::NorthWest => Orientation::SouthWest,
            Orientation::SouthWest => Orientation::SouthEast,
            Orientation::SouthEast => Orientation::NorthEast,
        }
    }

    /// Whether the arrow points toward `side`.
    ///
    /// One side of each axis is downwind: the arrow's north component picks
    /// between North and South, its east component between East and West.
    #[must_use]
    pub const fn is_downwind(self, side: Compass) -> bool {
        match side {
            Compass::North => self.north(),
            Compass::East => self.east(),
            Compass::South => !self.north(),
            Compass::West => !self.east(),
        }
    }

    /// NE and SW share an arrow axis, as do NW and SE.
    #[must_use]
    pub const fn is_rising(self) -> bool {
        matches!(self, Orientation::NorthEast | Orientation::SouthWest)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::NorthEast => "NE",
            Orientation::SouthEast => "SE",
            Orientation::SouthWest => "SW",
            Orientation::NorthWest => "NW",
        };
        f.write_str(name)
    }
}

/// One of the four edges, named relative to the wind arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeEdge {
    UpwindClockwise,
    UpwindAnticlockwise,
    DownwindClockwise,
    DownwindAnticlockwise,
}

/// Water (`true`) or land (`false`) on each relative edge.
///
/// Fixed when the tile is made; rotation never touches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edges {
    pub upwind_clockwise: bool,
    pub upwind_anticlockwise: bool,
    pub downwind_clockwise: bool,
    pub downwind_anticlockwise: bool,
}

impl Edges {
    #[must_use]
    pub const fn new(
        upwind_clockwise: bool,
        upwind_anticlockwise: bool,
        downwind_clockwise: bool,
        downwind_anticlockwise: bool,
    ) -> Self {
        Self {
            upwind_clockwise,
            upwind_anticlockwise,
            downwind_clockwise,
            downwind_anticlockwise,
        }
    }

    #[must_use]
    pub const fn all_water() -> Self {
        Self::new(true, true, true, true)
    }

    #[must_use]
    pub const fn all_land() -> Self {
        Self::new(false, false, false, false)
    }

    #[must_use]
    pub const fn get(self, edge: RelativeEdge) -> bool {
        match edge {
            RelativeEdge::UpwindClockwise => self.upwind_clockwise,
            RelativeEdge::UpwindAnticlockwise => self.upwind_anticlockwise,
            RelativeEdge::DownwindClockwise => self.downwind_clockwise,
            RelativeEdge::DownwindAnticlockwise => self.downwind_anticlockwise,
        }
    }

    /// The 16 edge combinations, upwind-clockwise varying slowest and water
    /// listed before land.
    pub fn combinations() -> impl Iterator<Item = Edges> {
        (0..16u8).map(|i| {
            Edges::new(i & 0b1000 == 0, i & 0b0100 == 0, i & 0b0010 == 0, i & 0b0001 == 0)
        })
    }
}

/// Which relative edge faces `side` under `orientation`.
#[must_use]
pub const fn relative_edge(orientation: Orientation, side: Compass) -> RelativeEdge {
    use Compass::*;
    use RelativeEdge::*;

    match (orientation, side) {
        (Orientation::NorthEast, North) => DownwindAnticlockwise,
        (Orientation::NorthEast, East) => DownwindClockwise,
        (Orientation::NorthEast, South) => UpwindAnticlockwise,
        (Orientation::NorthEast, West) => UpwindClockwise,

        (Orientation::SouthEast, North) => UpwindClockwise,
        (Orientation::SouthEast, East) => DownwindAnticlockwise,
        (Orientation::SouthEast, South) => DownwindClockwise,
        (Orientation::SouthEast, West) => UpwindAnticlockwise,

        (Orientation::SouthWest, North) => UpwindAnticlockwise,
        (Orientation::SouthWest, East) => UpwindClockwise,
        (Orientation::SouthWest, South) => DownwindAnticlockwise,
        (Orientation::SouthWest, West) => DownwindClockwise,

        (Orientation::NorthWest, North) => DownwindClockwise,
        (Orientation::NorthWest, East) => UpwindAnticlockwise,
        (Orientation::NorthWest, South) => UpwindClockwise,
        (Orientation::NorthWest, West) => DownwindAnticlockwise,
    }
}

/// Whether the `side` edge is water for a tile with these edges and arrow.
#[must_use]
pub const fn edge_at(orientation: Orientation, edges: Edges, side: Compass) -> bool {
    edges.get(relative_edge(orientation, side))
}

/// Whether the arrow of `orientation` points toward `side`.
#[must_use]
pub const fn is_downwind(orientation: Orientation, side: Compass) -> bool {
    orientation.is_downwind(side)
}
