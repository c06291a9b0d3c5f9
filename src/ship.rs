//! Ship definitions: identity, placement, orientation and health.

use alloc::string::String;
use core::fmt;

use crate::common::BoardError;
use crate::config::{MAX_SHIP_SIZE, MIN_SHIP_SIZE};

/// Direction a ship's body extends from its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Towards row − 1.
    North,
    /// Towards row + 1.
    South,
    /// Towards col + 1.
    East,
    /// Towards col − 1.
    West,
}

impl Orientation {
    /// All four cardinal directions.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Unit step `(d_row, d_col)` for this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Orientation::North => (-1, 0),
            Orientation::South => (1, 0),
            Orientation::East => (0, 1),
            Orientation::West => (0, -1),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    size: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// A ship anchored at `head` and extending `size` cells in `orientation`.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    name: String,
    size: usize,
    orientation: Orientation,
    head: (usize, usize),
    health: usize,
}

impl Ship {
    /// Create an undamaged ship. Board bounds are not checked here.
    pub fn new(
        name: impl Into<String>,
        size: usize,
        head: (usize, usize),
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if !(MIN_SHIP_SIZE..=MAX_SHIP_SIZE).contains(&size) {
            return Err(BoardError::InvalidShipSize { size });
        }
        Ok(Ship {
            name: name.into(),
            size,
            orientation,
            head,
            health: size,
        })
    }

    /// Create an undamaged ship of the given type.
    pub fn from_type(
        ship_type: ShipType,
        head: (usize, usize),
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        Self::new(ship_type.name(), ship_type.size(), head, orientation)
    }

    /// Record a torpedo hit. Health never drops below zero.
    pub fn hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// `true` once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Cells covered by this ship, head first. Coordinates are signed so
    /// footprints that leave the board can still be inspected.
    pub fn footprint(&self) -> impl Iterator<Item = (isize, isize)> {
        let (dr, dc) = self.orientation.delta();
        let (r0, c0) = (self.head.0 as isize, self.head.1 as isize);
        (0..self.size as isize).map(move |k| (r0 + k * dr, c0 + k * dc))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn head(&self) -> (usize, usize) {
        self.head
    }

    /// Remaining health in `0..=size`.
    pub fn health(&self) -> usize {
        self.health
    }

    /// Copy of this ship with full health, for reusing preset layouts.
    pub fn repaired(&self) -> Self {
        Ship {
            health: self.size,
            ..self.clone()
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, head: ({}, {}), orientation: {:?}, health: {} }}",
            self.name, self.size, self.head.0, self.head.1, self.orientation, self.health,
        )
    }
}
