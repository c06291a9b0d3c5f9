use alloc::vec::Vec;

use crate::common::BoardError;
use crate::ship::{Orientation, Ship, ShipType};

pub const DEFAULT_DIM: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const MIN_SHIP_SIZE: usize = 2;
pub const MAX_SHIP_SIZE: usize = 5;

/// Standard fleet, in placement order.
pub const DEFAULT_FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("destroyer", 2),
    ShipType::new("submarine", 3),
    ShipType::new("cruiser", 3),
    ShipType::new("battleship", 4),
    ShipType::new("carrier", 5),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Head samples tried per ship before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// How the fleet is put on the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShipConfig {
    /// `DEFAULT_FLEET` at uniformly random positions.
    #[default]
    Default,
    /// Pre-placed ships, written to the grid in list order.
    Explicit(Vec<Ship>),
}

/// Board construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub dim: usize,
    pub ships: ShipConfig,
    /// Hide ship positions when rendering.
    pub playmode: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            ships: ShipConfig::Default,
            playmode: true,
        }
    }
}

impl BoardConfig {
    /// Default fleet on a `dim × dim` board.
    pub fn with_dim(dim: usize) -> Self {
        Self {
            dim,
            ..Self::default()
        }
    }

    /// Fixed layout on a `dim × dim` board.
    pub fn explicit(dim: usize, ships: Vec<Ship>) -> Self {
        Self {
            dim,
            ships: ShipConfig::Explicit(ships),
            playmode: true,
        }
    }
}

/// Frozen 10×10 layout used to train against an unchanging board.
pub fn static_fleet_v1() -> Result<Vec<Ship>, BoardError> {
    Ok(alloc::vec![
        Ship::new("destroyer", 2, (9, 2), Orientation::North)?,
        Ship::new("submarine", 3, (7, 6), Orientation::South)?,
        Ship::new("cruiser", 3, (6, 9), Orientation::West)?,
        Ship::new("battleship", 4, (5, 5), Orientation::West)?,
        Ship::new("carrier", 5, (2, 9), Orientation::West)?,
    ])
}
