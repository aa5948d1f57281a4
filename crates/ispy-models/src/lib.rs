//! Shared data models for the ispy quadrant search.
//!
//! This crate provides Serde-serializable types for:
//! - Pixel-space geometry (bounding boxes)
//! - Selections extracted from inference replies

pub mod geometry;
pub mod selection;

// Re-export common types
pub use geometry::PixelBox;
pub use selection::{extract_cell_indices, SelectionError, SelectionResult};
