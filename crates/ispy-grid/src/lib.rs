//! 3x3 grid partition, merge and outline operations over images.
//!
//! The search loop repeatedly narrows an image down to the region a
//! vision model points at:
//! - [`partition`] slices a working region into 9 labeled cells and
//!   composes the bordered preview canvas shown to the model.
//! - [`merge_selection`] folds the chosen cells back into a smaller
//!   working region for the next round.
//! - [`outline_selection`] draws the final answer onto the original
//!   image.
//!
//! Every cell carries its bounding box in both the working image and
//! the original image, so the outline step stays correct at any
//! recursion depth.

pub mod error;
pub mod merge;
pub mod outline;
pub mod partition;
pub mod section;
pub mod style;

pub use error::{GridError, GridResult};
pub use merge::merge_selection;
pub use outline::outline_selection;
pub use partition::{compose_grid, partition, split_region};
pub use section::{Region, Section, SectionMap, GRID_DIM};
pub use style::GridStyle;
