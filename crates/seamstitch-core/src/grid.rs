//! Grid - rectangular row-major container
//!
//! `Grid<T>` backs every per-cell table in the crate family: input
//! images, cost maps, the search's distance and predecessor tables, and
//! the stitch mask.
//!
//! # Examples
//!
//! ```
//! use seamstitch_core::{Grid, Position};
//!
//! let mut grid = Grid::new(3, 2, 0u8).unwrap();
//! grid.set(Position::new(1, 2), 7).unwrap();
//! assert_eq!(grid.get(Position::new(1, 2)).unwrap(), 7);
//! assert!(grid.get(Position::new(2, 0)).is_err());
//! ```

use crate::error::{Error, Result};
use crate::position::Position;

/// Rectangular grid of values
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The cell at
/// `(row, col)` is at index `row * width + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    /// Width in cells (number of columns)
    width: u32,
    /// Height in cells (number of rows)
    height: u32,
    /// Cell data (row-major, no padding)
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with every cell set to `fill`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32, fill: T) -> Result<Self> {
        check_dimensions(width, height)?;
        let size = (width as usize) * (height as usize);
        Ok(Grid {
            width,
            height,
            data: vec![fill; size],
        })
    }

    /// Build a grid from nested rows, `rows[row][col]`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if there are no rows or the first
    /// row is empty, and `Error::InvalidParameter` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = extent(rows.len(), "rows")?;
        let width = extent(rows.first().map_or(0, |r| r.len()), "columns")?;
        check_dimensions(width, height)?;

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width as usize {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            data.extend(row);
        }

        Ok(Grid {
            width,
            height,
            data,
        })
    }
}

impl<T> Grid<T> {
    /// Create a grid from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f` at every position
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(Position) -> T) -> Result<Self> {
        check_dimensions(width, height)?;
        let data = (0..height)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
            .map(&mut f)
            .collect();
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Width in cells
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed grid; present for API symmetry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if `pos` lies inside the grid
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        (pos.row as usize) * (self.width as usize) + (pos.col as usize)
    }

    fn check(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok(self.index(pos))
        } else {
            Err(Error::IndexOutOfBounds {
                row: pos.row,
                col: pos.col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Borrow the value at `pos`
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `pos` is outside the grid.
    pub fn get_ref(&self, pos: Position) -> Result<&T> {
        let i = self.check(pos)?;
        Ok(&self.data[i])
    }

    /// Borrow the value at `pos` without bounds reporting
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn get_ref_unchecked(&self, pos: Position) -> &T {
        &self.data[self.index(pos)]
    }

    /// Mutably borrow the value at `pos`
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T> {
        let i = self.check(pos)?;
        Ok(&mut self.data[i])
    }

    /// Set the value at `pos`
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, value: T) -> Result<()> {
        let i = self.check(pos)?;
        self.data[i] = value;
        Ok(())
    }

    /// Set the value at `pos` without bounds reporting
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn set_unchecked(&mut self, pos: Position, value: T) {
        let i = self.index(pos);
        self.data[i] = value;
    }

    /// Raw row-major cell data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.width as usize)
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Iterate over `(position, value)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(self.data.iter())
    }

    /// Check that `other` has the same dimensions as `self`
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the sizes differ.
    pub fn check_same_size<U>(&self, other: &Grid<U>) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Map every cell into a new grid of the same size
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Get the value at `pos`
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> Result<T> {
        self.get_ref(pos).copied()
    }

    /// Get the value at `pos` without bounds reporting
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn get_unchecked(&self, pos: Position) -> T {
        self.data[self.index(pos)]
    }
}

fn extent(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| Error::InvalidParameter(format!("{} {} exceeds the u32 range", len, what)))
}

/// Reject zero-sized grids
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            Grid::new(0, 3, 0u8),
            Err(Error::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, 0, 0u8).is_err());
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.get(Position::new(1, 0)).unwrap(), 4);
        assert_eq!(grid.get(Position::new(0, 2)).unwrap(), 3);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Grid::from_rows(vec![vec![1, 2], vec![3]]);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_extent_overflow() {
        assert_eq!(extent(7, "rows"), Ok(7));
        assert_eq!(extent(u32::MAX as usize, "rows"), Ok(u32::MAX));
        assert!(matches!(
            extent(u32::MAX as usize + 1, "columns"),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<u8>> = Vec::new();
        assert!(matches!(
            Grid::from_rows(rows),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(Grid::<u8>::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_from_data_length() {
        assert!(Grid::from_data(2, 2, vec![0u8; 4]).is_ok());
        assert!(Grid::from_data(2, 2, vec![0u8; 3]).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(2, 2, 0i32).unwrap();
        let err = grid.set(Position::new(2, 0), 1).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfBounds {
                row: 2,
                col: 0,
                width: 2,
                height: 2
            }
        );
        assert!(grid.get(Position::new(0, 2)).is_err());
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::new(2, 2, ()).unwrap();
        let p: Vec<_> = grid.positions().collect();
        assert_eq!(
            p,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_from_fn_and_rows() {
        let grid = Grid::from_fn(3, 2, |p| p.row * 10 + p.col).unwrap();
        let rows: Vec<Vec<u32>> = grid.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![10, 11, 12]]);
    }

    #[test]
    fn test_check_same_size() {
        let a = Grid::new(3, 2, 0u8).unwrap();
        let b = Grid::new(2, 3, 0.0f64).unwrap();
        assert_eq!(
            a.check_same_size(&b),
            Err(Error::DimensionMismatch {
                expected: (3, 2),
                actual: (2, 3)
            })
        );
        assert!(a.check_same_size(&a.map(|_| 1u16)).is_ok());
    }
}
