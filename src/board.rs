//! Game board state: the cell grid, the fleet and the shot counter.
//!
//! Grid cells hold `0` for open ocean, `k` for an intact segment of ship
//! `k - 1` and `-k` once that segment has been hit.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, info, trace};
use rand::{seq::SliceRandom, Rng};

use crate::common::{BoardError, Shot};
use crate::config::{BoardConfig, ShipConfig, DEFAULT_FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::{Grid, GridError};
use crate::ship::{Orientation, Ship, ShipType};

/// Serializable board state for saving or restoring games.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub grid: Grid<i32>,
    pub ships: Vec<Ship>,
    pub shots: usize,
    pub playmode: bool,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid<i32>,
    ships: Vec<Ship>,
    shots: usize,
    playmode: bool,
}

impl Board {
    /// Build a board and place its fleet according to `config`.
    pub fn new<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::empty(config.dim, config.playmode)?;
        match &config.ships {
            ShipConfig::Default => {
                for ship_type in DEFAULT_FLEET {
                    board.place_random(ship_type, rng)?;
                }
            }
            ShipConfig::Explicit(ships) => {
                if ships.is_empty() {
                    return Err(BoardError::InvalidShipConfig);
                }
                for ship in ships {
                    board.place(ship.repaired())?;
                }
            }
        }
        Ok(board)
    }

    /// Standard 10×10 board with the default fleet at random positions.
    pub fn with_default_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        Self::new(&BoardConfig::default(), rng)
    }

    /// Board with a fixed layout; no randomness involved.
    pub fn from_ships(dim: usize, ships: Vec<Ship>) -> Result<Self, BoardError> {
        if ships.is_empty() {
            return Err(BoardError::InvalidShipConfig);
        }
        let mut board = Self::empty(dim, true)?;
        for ship in ships {
            board.place(ship.repaired())?;
        }
        Ok(board)
    }

    fn empty(dim: usize, playmode: bool) -> Result<Self, BoardError> {
        let grid = Grid::try_new(dim).map_err(|e| match e {
            GridError::ZeroDimension | GridError::TooLarge { .. } => BoardError::InvalidDimension,
            other => BoardError::Grid(other),
        })?;
        Ok(Board {
            grid,
            ships: Vec::new(),
            shots: 0,
            playmode,
        })
    }

    /// Place a ship on open ocean. Its grid value is its index + 1.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        for (r, c) in ship.footprint() {
            let (r, c) = self.grid.locate(r, c).ok_or(BoardError::ShipOutOfBounds)?;
            if self.grid.get(r, c)? != 0 {
                return Err(BoardError::ShipOverlaps);
            }
        }
        self.commit(ship)
    }

    fn commit(&mut self, ship: Ship) -> Result<(), BoardError> {
        let marker = self.ships.len() as i32 + 1;
        for (r, c) in ship.footprint() {
            let (r, c) = self.grid.locate(r, c).ok_or(BoardError::ShipOutOfBounds)?;
            self.grid.set(r, c, marker)?;
        }
        trace!(
            "placed {} at {:?} facing {:?}",
            ship.name(),
            ship.head(),
            ship.orientation()
        );
        self.ships.push(ship);
        Ok(())
    }

    fn fits(&self, ship: &Ship) -> bool {
        ship.footprint().all(|(r, c)| {
            self.grid
                .locate(r, c)
                .is_some_and(|(r, c)| self.grid.get(r, c) == Ok(0))
        })
    }

    /// Sample head cells until one admits the ship in some shuffled
    /// orientation. Gives up after `MAX_PLACEMENT_ATTEMPTS` heads.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        ship_type: ShipType,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        let dim = self.grid.dim();
        let occupied = self.grid.count_nonzero();
        if occupied + ship_type.size() > self.grid.area() {
            return Err(BoardError::UnableToPlaceShip {
                name: ship_type.name().into(),
            });
        }

        let mut orientations = Orientation::ALL;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let head = (rng.random_range(0..dim), rng.random_range(0..dim));
            if self.grid.get(head.0, head.1)? != 0 {
                continue;
            }
            orientations.shuffle(rng);
            for orientation in orientations {
                let ship = Ship::from_type(ship_type, head, orientation)?;
                if self.fits(&ship) {
                    return self.commit(ship);
                }
            }
        }
        Err(BoardError::UnableToPlaceShip {
            name: ship_type.name().into(),
        })
    }

    /// Fire at (row, col). Every in-bounds shot counts towards the score;
    /// striking open ocean or an already-hit segment is a miss.
    pub fn torpedo(&mut self, row: isize, col: isize) -> Result<Shot, BoardError> {
        let (r, c) = self
            .grid
            .locate(row, col)
            .ok_or(BoardError::OutOfBounds { row, col })?;
        self.shots += 1;

        let cell = self.grid.get(r, c)?;
        if cell <= 0 {
            debug!("shot {}: miss at ({}, {})", self.shots, r, c);
            return Ok(Shot::Miss);
        }

        let ship = self
            .ships
            .get_mut((cell - 1) as usize)
            .ok_or(BoardError::CorruptState)?;
        ship.hit();
        if ship.is_sunk() {
            info!("{} sunk after {} shots", ship.name(), self.shots);
        }
        self.grid.set(r, c, -cell)?;
        debug!("shot {}: hit at ({}, {})", self.shots, r, c);

        if self.is_game_over() {
            info!("all ships sunk, {} torpedoes used", self.shots);
        }
        Ok(Shot::Hit)
    }

    /// Returns `true` when the fleet has no health left.
    pub fn is_game_over(&self) -> bool {
        self.remaining_health() == 0
    }

    /// Sum of health over all ships.
    pub fn remaining_health(&self) -> usize {
        self.ships.iter().map(Ship::health).sum()
    }

    /// Number of ships still afloat and their combined health.
    pub fn ships_afloat(&self) -> (usize, usize) {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .fold((0, 0), |(count, total), s| (count + 1, total + s.health()))
    }

    /// Torpedoes fired so far.
    pub fn score(&self) -> usize {
        self.shots
    }

    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    /// Raw cell grid.
    pub fn grid(&self) -> &Grid<i32> {
        &self.grid
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn playmode(&self) -> bool {
        self.playmode
    }

    /// Snapshot the board.
    pub fn state(&self) -> BoardState {
        BoardState {
            grid: self.grid.clone(),
            ships: self.ships.clone(),
            shots: self.shots,
            playmode: self.playmode,
        }
    }

    /// Restore a board, re-checking that grid markers agree with the fleet.
    pub fn from_state(state: BoardState) -> Result<Self, BoardError> {
        if state.grid.dim() == 0 {
            return Err(BoardError::InvalidDimension);
        }
        if !state.grid.is_well_formed() {
            return Err(BoardError::CorruptState);
        }
        let fleet = state.ships.len();
        if state
            .grid
            .iter_nonzero()
            .any(|(_, v)| v.unsigned_abs() as usize > fleet)
        {
            return Err(BoardError::CorruptState);
        }

        for (idx, ship) in state.ships.iter().enumerate() {
            let marker = idx as i32 + 1;
            let mut hits = 0;
            for (r, c) in ship.footprint() {
                let (r, c) = state.grid.locate(r, c).ok_or(BoardError::CorruptState)?;
                match state.grid.get(r, c)? {
                    v if v == marker => {}
                    v if v == -marker => hits += 1,
                    _ => return Err(BoardError::CorruptState),
                }
            }
            let claimed = state
                .grid
                .iter_nonzero()
                .filter(|(_, v)| v.abs() == marker)
                .count();
            if claimed != ship.size()
                || ship.health() > ship.size()
                || ship.size() - ship.health() != hits
            {
                return Err(BoardError::CorruptState);
            }
        }

        Ok(Board {
            grid: state.grid,
            ships: state.ships,
            shots: state.shots,
            playmode: state.playmode,
        })
    }

    /// Encode the board snapshot with bincode.
    #[cfg(feature = "std")]
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(&self.state())?)
    }

    /// Decode and validate a snapshot produced by [`Board::to_bytes`].
    #[cfg(feature = "std")]
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let state: BoardState = bincode::deserialize(bytes)?;
        Board::from_state(state).map_err(|e| anyhow::anyhow!(e))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  shots: {},\n  grid: {:?},\n  ships: {:?}\n}}",
            self.shots, self.grid, self.ships
        )
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        b.state()
    }
}
