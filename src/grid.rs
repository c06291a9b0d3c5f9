//! A square, heap-backed grid used for board cells, probe maps and
//! observations.
//!
//! The type is `no_std` friendly (it only needs `alloc`). Cells are stored
//! row-major in a `Vec<T>`; the zero value of `T` means "empty".

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use num_traits::Zero;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid must be at least 1×1.
    ZeroDimension,
    /// Row or column index is out of bounds [0..dim).
    IndexOutOfBounds { row: usize, col: usize },
    /// Raw cell data does not fill a `dim × dim` grid.
    CellCount { expected: usize, found: usize },
    /// `dim * dim` does not fit in a `usize`.
    TooLarge { dim: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroDimension => write!(f, "ZeroDimension: grid must be at least 1x1"),
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            GridError::CellCount { expected, found } => {
                write!(f, "CellCount: expected {} cells, found {}", expected, found)
            }
            GridError::TooLarge { dim } => write!(f, "TooLarge: {}x{} grid overflows", dim, dim),
        }
    }
}

/// A `dim × dim` grid of `T`.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Copy + Zero,
{
    /// Create a zero-filled grid without checking the dimension.
    ///
    /// Panics if `dim * dim` overflows; use [`Grid::try_new`] for untrusted sizes.
    pub fn new(dim: usize) -> Self {
        Grid {
            dim,
            cells: vec![T::zero(); dim * dim],
        }
    }

    /// Fallible constructor: rejects a zero or overflowing dimension.
    pub fn try_new(dim: usize) -> Result<Self, GridError> {
        let area = Self::checked_area(dim)?;
        Ok(Grid {
            dim,
            cells: vec![T::zero(); area],
        })
    }

    fn checked_area(dim: usize) -> Result<usize, GridError> {
        if dim == 0 {
            return Err(GridError::ZeroDimension);
        }
        dim.checked_mul(dim).ok_or(GridError::TooLarge { dim })
    }

    /// Build a grid from row-major cells. `cells.len()` must equal `dim * dim`.
    pub fn from_cells(dim: usize, cells: Vec<T>) -> Result<Self, GridError> {
        let expected = Self::checked_area(dim)?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Grid { dim, cells })
    }

    /// Side length.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of cells (`dim * dim`).
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Gets the value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<T, GridError> {
        self.check_bounds(row, col)?;
        self.cells
            .get(row * self.dim + col)
            .copied()
            .ok_or(GridError::IndexOutOfBounds { row, col })
    }

    /// Sets the value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        let cell = self
            .cells
            .get_mut(row * self.dim + col)
            .ok_or(GridError::IndexOutOfBounds { row, col })?;
        *cell = value;
        Ok(())
    }

    /// Resets every cell to zero.
    pub fn clear_all(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = T::zero();
        }
    }

    /// Translate a signed coordinate into an in-bounds index pair.
    #[inline]
    pub fn locate(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        if row < 0 || col < 0 {
            return None;
        }
        let (r, c) = (row as usize, col as usize);
        if r >= self.dim || c >= self.dim {
            None
        } else {
            Some((r, c))
        }
    }

    /// Number of non-zero cells.
    pub fn count_nonzero(&self) -> usize {
        self.cells.iter().filter(|v| !v.is_zero()).count()
    }

    /// Returns true if every cell is zero.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|v| v.is_zero())
    }

    /// Iterator over `((row, col), value)` for every non-zero cell.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(move |(idx, v)| ((idx / dim, idx % dim), *v))
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.dim.max(1))
    }

    /// True when the cell buffer holds exactly `dim * dim` cells. Always the
    /// case for grids built through the constructors; deserialized grids may
    /// not be.
    pub fn is_well_formed(&self) -> bool {
        Self::checked_area(self.dim) == Ok(self.cells.len())
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.dim || col >= self.dim {
            Err(GridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T> fmt::Debug for Grid<T>
where
    T: Copy + Zero + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.dim)?;
        for row in self.rows() {
            for v in row {
                write!(f, "{:>3}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
