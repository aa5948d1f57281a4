//! Sections and the per-round section map.

use std::collections::BTreeMap;

use image::RgbaImage;
use ispy_models::PixelBox;

use crate::error::{GridError, GridResult};

/// Grid side length. The partitioner always produces `GRID_DIM *
/// GRID_DIM` cells.
pub const GRID_DIM: u32 = 3;

/// A rectangular working image plus its accumulated offset in
/// original-image coordinates.
///
/// The first round works on the source image at offset `(0, 0)`; each
/// merge produces the next round's region with the union box top-left
/// as offset.
#[derive(Debug, Clone)]
pub struct Region {
    /// Pixel data of the working image
    pub image: RgbaImage,
    /// Top-left of this region in original-image coordinates
    pub offset: (u32, u32),
}

impl Region {
    /// Wrap a source image as the root region.
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            offset: (0, 0),
        }
    }

    /// Wrap a derived sub-image at a known global offset.
    pub fn with_offset(image: RgbaImage, offset: (u32, u32)) -> Self {
        Self { image, offset }
    }
}

/// One cell of a partition round.
#[derive(Debug, Clone)]
pub struct Section {
    /// Grid index, 0..8 row-major
    pub index: u32,
    /// Bounding box relative to the round's working image
    pub local_box: PixelBox,
    /// The same box in original-image coordinates
    pub global_box: PixelBox,
    /// Cropped pixel data
    pub image: RgbaImage,
    /// Global top-left, the offset inherited by sub-partitions
    pub offset: (u32, u32),
}

/// The 9 cells produced by one partition round, keyed by grid index.
///
/// Created fresh each round and discarded once the next round's
/// region has been derived from it.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    sections: BTreeMap<u32, Section>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section) {
        self.sections.insert(section.index, section);
    }

    /// Look up a section by grid index.
    ///
    /// A missing index is a usage error and aborts the round; it is
    /// never skipped silently.
    pub fn get(&self, index: u32) -> GridResult<&Section> {
        self.sections
            .get(&index)
            .ok_or(GridError::MissingSection { index })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in grid index order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// All indices present, in order.
    pub fn indices(&self) -> Vec<u32> {
        self.sections.keys().copied().collect()
    }

    /// Minimal box covering the global boxes of the given indices, or
    /// of every section when `indices` is `None`.
    pub fn union_box(&self, indices: Option<&[u32]>) -> GridResult<PixelBox> {
        let mut result: Option<PixelBox> = None;

        match indices {
            Some(selected) => {
                for &index in selected {
                    let section = self.get(index)?;
                    result = Some(match result {
                        Some(acc) => acc.union(&section.global_box),
                        None => section.global_box,
                    });
                }
            }
            None => {
                for section in self.sections.values() {
                    result = Some(match result {
                        Some(acc) => acc.union(&section.global_box),
                        None => section.global_box,
                    });
                }
            }
        }

        result.ok_or(GridError::EmptySelection)
    }
}
