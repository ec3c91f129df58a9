//! seamstitch-region - Region labeling for stitch masks
//!
//! This crate turns a seam into a two-region mask:
//!
//! - **Seam marking** - Validate a seam and mark its cells
//! - **Flood fill** - Iterative region growing over empty cells
//! - **Pocket resolution** - Side-of-seam labeling for sealed-off cells
//! - **Separation checks** - Detect regions touching across the seam
//!
//! # Examples
//!
//! ```
//! use seamstitch_core::{Label, Mask, Position};
//! use seamstitch_region::{FillOptions, label_regions, mark_seam};
//!
//! let mut mask = Mask::empty_mask(2, 2).unwrap();
//! mark_seam(&mut mask, &[Position::new(0, 0), Position::new(1, 1)]).unwrap();
//! let stats = label_regions(&mut mask, &FillOptions::default()).unwrap();
//!
//! assert_eq!(stats.region_a, 1);
//! assert_eq!(mask.get(Position::new(0, 1)).unwrap(), Label::RegionB);
//! ```

pub mod error;
pub mod floodfill;
pub mod pockets;
pub mod separation;

// Re-export core types
pub use seamstitch_core;

pub use error::{RegionError, RegionResult};
pub use floodfill::{
    FillOptions, RegionStats, floodfill, label_mask, label_regions, mark_seam,
};
pub use pockets::{PocketStats, resolve_pockets, side_of_seam};
pub use separation::{find_region_contacts, is_cleanly_separated};
