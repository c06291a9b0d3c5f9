//! Common types for Battleship: board errors and torpedo outcomes.

use alloc::string::String;
use core::fmt;

use crate::grid::GridError;

/// Outcome of a torpedo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    /// Open ocean, or a cell that was already hit.
    Miss,
    /// Struck a live ship segment.
    Hit,
}

impl Shot {
    /// Numeric outcome: 0 for a miss, 1 for a hit.
    pub fn as_u8(self) -> u8 {
        match self {
            Shot::Miss => 0,
            Shot::Hit => 1,
        }
    }

    pub fn is_hit(self) -> bool {
        self == Shot::Hit
    }
}

/// Errors returned by board, agent and environment operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (e.g., invalid size or index).
    Grid(GridError),
    /// Torpedo coordinate lies outside the board.
    OutOfBounds { row: isize, col: isize },
    /// Board dimension must be at least 1.
    InvalidDimension,
    /// Ship size outside the supported range.
    InvalidShipSize { size: usize },
    /// Ship configuration is empty or otherwise unusable.
    InvalidShipConfig,
    /// Ship footprint leaves the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement gave up on the named ship.
    UnableToPlaceShip { name: String },
    /// Every cell has been probed but ships remain afloat.
    NoTargetsLeft,
    /// Environment action index outside the action space.
    InvalidAction { action: usize },
    /// The environment episode already ended; call `reset`.
    EpisodeFinished,
    /// A benchmark was asked to run zero games.
    NoGames,
    /// A restored snapshot violates the grid/ship invariants.
    CorruptState,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Provided coordinates ({}, {}) are invalid", row, col)
            }
            BoardError::InvalidDimension => write!(f, "Board dimension must be at least 1"),
            BoardError::InvalidShipSize { size } => {
                write!(f, "Ship size {} is outside the supported range", size)
            }
            BoardError::InvalidShipConfig => write!(f, "Ship configuration is not valid"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip { name } => {
                write!(f, "Unable to place ship '{}'", name)
            }
            BoardError::NoTargetsLeft => write!(f, "Every cell has been probed"),
            BoardError::InvalidAction { action } => {
                write!(f, "Action {} is outside the action space", action)
            }
            BoardError::EpisodeFinished => write!(f, "Episode already finished"),
            BoardError::NoGames => write!(f, "Benchmark needs at least one game"),
            BoardError::CorruptState => write!(f, "Board state is inconsistent"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
