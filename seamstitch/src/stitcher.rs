//! Seam stitching of two equal-sized images
//!
//! [`Stitcher`] chains the seam search and the region labeler: it finds
//! the cheapest seam between two images, marks it on a fresh mask and
//! labels the cells on either side. A stitcher holds only its options;
//! every call builds and drops its own working tables, so one stitcher
//! can serve any number of calls.

use crate::error::StitchResult;
use log::debug;
use seamstitch_core::{Connectivity, CostModel, Grid, Mask, PixelCost, PixelDistance};
use seamstitch_region::{FillOptions, RegionStats, label_mask, label_regions};
use seamstitch_seam::{Seam, SeamOptions, TieBreak, find_seam};

/// Options for stitching
#[derive(Debug, Clone, Default)]
pub struct StitchOptions {
    /// Seam search options
    pub seam: SeamOptions,
    /// Region labeling options
    pub fill: FillOptions,
}

impl StitchOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seam search tie-break policy
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.seam.tie_break = tie_break;
        self
    }

    /// Set the connectivity used by the region fills
    pub fn with_fill_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.fill.connectivity = connectivity;
        self
    }
}

/// Everything produced by one stitch
#[derive(Debug, Clone)]
pub struct Stitching {
    /// The minimum-cost seam
    pub seam: Seam,
    /// Labeled mask
    pub mask: Mask,
    /// Region cell counts
    pub stats: RegionStats,
    /// Total seam cost (source cell excluded)
    pub cost: f64,
}

/// Computes stitch masks for image pairs
#[derive(Debug, Clone, Default)]
pub struct Stitcher {
    options: StitchOptions,
}

impl Stitcher {
    /// Stitcher with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Stitcher with the given options
    pub fn with_options(options: StitchOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> &StitchOptions {
        &self.options
    }

    /// Minimum-cost seam between two images
    ///
    /// The seam runs from `(0, 0)` to `(height - 1, width - 1)`; each cell
    /// costs the squared pixel distance between the images.
    ///
    /// # Errors
    ///
    /// Fails if the images differ in size.
    pub fn seam<P: PixelDistance>(&self, image1: &Grid<P>, image2: &Grid<P>) -> StitchResult<Seam> {
        let cost = PixelCost::new(image1, image2)?;
        let (width, height) = cost.dimensions();
        Ok(find_seam(width, height, &cost, &self.options.seam)?)
    }

    /// Label the regions of a mask that already carries a seam
    ///
    /// Replaces every empty cell with region A (bottom-left side) or
    /// region B (top-right side). Without the seam's order, cells the
    /// seam seals off from both corners cannot be placed and are reported
    /// as an error, and the mask is left partially labeled.
    /// [`Stitcher::stitch`] does not have that limitation.
    pub fn floodfill(&self, mask: &mut Mask) -> StitchResult<RegionStats> {
        Ok(label_regions(mask, &self.options.fill)?)
    }

    /// Stitch mask for two images
    ///
    /// # Errors
    ///
    /// Fails if the images differ in size.
    pub fn stitch<P: PixelDistance>(&self, image1: &Grid<P>, image2: &Grid<P>) -> StitchResult<Mask> {
        Ok(self.stitch_detailed(image1, image2)?.mask)
    }

    /// Stitch two images and keep the seam and counts alongside the mask
    pub fn stitch_detailed<P: PixelDistance>(
        &self,
        image1: &Grid<P>,
        image2: &Grid<P>,
    ) -> StitchResult<Stitching> {
        let cost = PixelCost::new(image1, image2)?;
        let (width, height) = cost.dimensions();
        self.stitch_with_cost(width, height, &cost)
    }

    /// Stitch using an arbitrary cost model over a `width` x `height` grid
    pub fn stitch_with_cost<M>(&self, width: u32, height: u32, model: &M) -> StitchResult<Stitching>
    where
        M: CostModel + ?Sized,
    {
        let seam = find_seam(width, height, model, &self.options.seam)?;
        let cost = seam.cost(model);

        let mut mask = Mask::empty_mask(width, height)?;
        let stats = label_mask(&mut mask, &seam, &self.options.fill)?;

        debug!(
            "stitched {}x{}: seam={} cost={} a={} b={}",
            width,
            height,
            seam.len(),
            cost,
            stats.region_a,
            stats.region_b
        );

        Ok(Stitching {
            seam,
            mask,
            stats,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StitchError;
    use seamstitch_core::{Label, Position, Rgb, render_mask};
    use seamstitch_seam::SeamError;

    #[test]
    fn test_seam_concrete_scenario() {
        let image1 = Grid::from_rows(vec![vec![0i32, 0], vec![0, 0]]).unwrap();
        let image2 = Grid::from_rows(vec![vec![0i32, 1], vec![2, 0]]).unwrap();
        let seam = Stitcher::new().seam(&image1, &image2).unwrap();
        assert_eq!(
            seam.positions(),
            &[Position::new(0, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_stitch_concrete_scenario() {
        let image1 = Grid::from_rows(vec![vec![0i32, 0], vec![0, 0]]).unwrap();
        let image2 = Grid::from_rows(vec![vec![0i32, 1], vec![2, 0]]).unwrap();
        let mask = Stitcher::new().stitch(&image1, &image2).unwrap();
        assert_eq!(render_mask(&mask), "#B\nA#\n");
    }

    #[test]
    fn test_mismatched_images() {
        let image1 = Grid::new(3, 2, 0u8).unwrap();
        let image2 = Grid::new(2, 3, 0u8).unwrap();
        let stitcher = Stitcher::new();
        assert!(matches!(
            stitcher.seam(&image1, &image2),
            Err(StitchError::Core(seamstitch_core::Error::DimensionMismatch { .. }))
        ));
        assert!(stitcher.stitch(&image1, &image2).is_err());
    }

    #[test]
    fn test_single_pixel() {
        let image = Grid::new(1, 1, Rgb::new(1, 2, 3)).unwrap();
        let result = Stitcher::new().stitch_detailed(&image, &image).unwrap();
        assert_eq!(result.seam.positions(), &[Position::new(0, 0)]);
        assert_eq!(result.mask.get(Position::new(0, 0)).unwrap(), Label::Seam);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_floodfill_marked_mask() {
        let mut mask = Mask::empty_mask(3, 3).unwrap();
        for i in 0..3 {
            mask.set(Position::new(i, i), Label::Seam).unwrap();
        }
        let stats = Stitcher::new().floodfill(&mut mask).unwrap();
        assert_eq!((stats.region_a, stats.region_b), (3, 3));
        assert_eq!(render_mask(&mask), "#BB\nA#B\nAA#\n");
    }

    #[test]
    fn test_cost_map_of_wrong_size() {
        let stitcher = Stitcher::new();
        let transposed = Grid::new(2, 4, 100.0).unwrap();
        assert_eq!(
            stitcher.stitch_with_cost(4, 2, &transposed).err(),
            Some(StitchError::Seam(SeamError::Core(
                seamstitch_core::Error::DimensionMismatch {
                    expected: (4, 2),
                    actual: (2, 4)
                }
            )))
        );

        let small = Grid::new(2, 2, 1.0).unwrap();
        assert!(stitcher.stitch_with_cost(3, 3, &small).is_err());
    }

    #[test]
    fn test_no_path_surfaces() {
        let model = |p: Position| if p == Position::new(1, 1) { f64::INFINITY } else { 1.0 };
        let result = Stitcher::new().stitch_with_cost(2, 2, &model);
        assert_eq!(
            result.err(),
            Some(StitchError::Seam(SeamError::NoPath {
                width: 2,
                height: 2
            }))
        );
    }
}
