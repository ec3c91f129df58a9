//! Per-cell cost models
//!
//! The seam search treats each cell's cost as a vertex weight. A
//! [`CostModel`] supplies that weight as a pure function of a position;
//! how the weight is derived from the two images is up to the model.
//!
//! # Examples
//!
//! ```
//! use seamstitch_core::{CostModel, Grid, PixelCost, Position};
//!
//! let a = Grid::from_rows(vec![vec![0u8, 0], vec![0, 0]]).unwrap();
//! let b = Grid::from_rows(vec![vec![0u8, 1], vec![2, 0]]).unwrap();
//! let cost = PixelCost::new(&a, &b).unwrap();
//! assert_eq!(cost.cost(Position::new(1, 0)), 4.0);
//! ```

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::position::Position;

/// Source of non-negative per-cell costs
pub trait CostModel {
    /// Cost of entering the cell at `pos`
    ///
    /// Must be non-negative. `f64::INFINITY` marks an impassable cell.
    /// Callers only pass positions inside the grid the model describes.
    fn cost(&self, pos: Position) -> f64;

    /// Size of the grid the model is defined on, as (width, height)
    ///
    /// `None` means the model accepts any position, as closures do.
    fn dimensions(&self) -> Option<(u32, u32)> {
        None
    }
}

impl<F> CostModel for F
where
    F: Fn(Position) -> f64,
{
    fn cost(&self, pos: Position) -> f64 {
        self(pos)
    }
}

/// A precomputed cost map
impl CostModel for Grid<f64> {
    fn cost(&self, pos: Position) -> f64 {
        self.get_unchecked(pos)
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.width(), self.height()))
    }
}

/// Squared distance between two pixel values
pub trait PixelDistance {
    /// Squared distance between `self` and `other`
    fn sq_distance(&self, other: &Self) -> f64;
}

macro_rules! impl_scalar_distance {
    ($($t:ty),*) => {
        $(
            impl PixelDistance for $t {
                #[inline]
                fn sq_distance(&self, other: &Self) -> f64 {
                    let d = *self as f64 - *other as f64;
                    d * d
                }
            }
        )*
    };
}

impl_scalar_distance!(u8, u16, u32, i32, i64, f32, f64);

/// Packed 24-bit RGB pixel, `0x00RRGGBB`
///
/// The top byte is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Pack three channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Red channel
    #[inline]
    pub fn red(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    /// Green channel
    #[inline]
    pub fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    /// Blue channel
    #[inline]
    pub fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

impl PixelDistance for Rgb {
    /// Sum of squared channel differences
    fn sq_distance(&self, other: &Self) -> f64 {
        let dr = self.red() as f64 - other.red() as f64;
        let dg = self.green() as f64 - other.green() as f64;
        let db = self.blue() as f64 - other.blue() as f64;
        dr * dr + dg * dg + db * db
    }
}

/// Cost model comparing two equal-sized images pixel by pixel
#[derive(Debug, Clone, Copy)]
pub struct PixelCost<'a, P> {
    image1: &'a Grid<P>,
    image2: &'a Grid<P>,
}

impl<'a, P: PixelDistance> PixelCost<'a, P> {
    /// Pair two images
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the images differ in size.
    pub fn new(image1: &'a Grid<P>, image2: &'a Grid<P>) -> Result<Self> {
        image1.check_same_size(image2)?;
        Ok(Self { image1, image2 })
    }

    /// Dimensions shared by both images, as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image1.dimensions()
    }
}

impl<P: PixelDistance> CostModel for PixelCost<'_, P> {
    fn cost(&self, pos: Position) -> f64 {
        self.image1
            .get_ref_unchecked(pos)
            .sq_distance(self.image2.get_ref_unchecked(pos))
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        Some(self.image1.dimensions())
    }
}

/// Materialize a cost model into a validated cost map
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if the model is defined on a grid of
/// another size, `Error::InvalidDimension` for a zero-sized grid and
/// `Error::InvalidCost` at the first negative or NaN cost.
pub fn evaluate_costs<M>(width: u32, height: u32, model: &M) -> Result<Grid<f64>>
where
    M: CostModel + ?Sized,
{
    match model.dimensions() {
        Some(actual) if actual != (width, height) => {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual,
            });
        }
        _ => {}
    }
    let costs = Grid::from_fn(width, height, |p| model.cost(p))?;
    if let Some((pos, &value)) = costs.iter().find(|(_, c)| c.is_nan() || **c < 0.0) {
        return Err(Error::InvalidCost {
            row: pos.row,
            col: pos.col,
            value,
        });
    }
    Ok(costs)
}
