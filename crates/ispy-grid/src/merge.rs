//! Merging selected sections into the next round's working region.

use image::imageops::replace;
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::section::{Region, SectionMap};

/// Merge the selected cells of a prior round into a new working
/// region.
///
/// The region canvas is the minimal box covering the selected cells'
/// global boxes. Every cell of the map whose global box lies fully
/// inside that union is pasted at its offset-corrected position;
/// cells that only partially overlap the union are skipped. The union
/// top-left becomes the region's accumulated global offset.
pub fn merge_selection(map: &SectionMap, indices: &[u32]) -> GridResult<Region> {
    if indices.is_empty() {
        return Err(GridError::EmptySelection);
    }

    let union = map.union_box(Some(indices))?;
    let mut canvas = RgbaImage::from_pixel(union.width(), union.height(), Rgba([0, 0, 0, 255]));

    let mut pasted = 0usize;
    for section in map.sections() {
        if !union.contains_box(&section.global_box) {
            continue;
        }
        let pos_x = (section.global_box.left - union.left) as i64;
        let pos_y = (section.global_box.top - union.top) as i64;
        replace(&mut canvas, &section.image, pos_x, pos_y);
        pasted += 1;
    }

    debug!(
        left = union.left,
        top = union.top,
        width = union.width(),
        height = union.height(),
        pasted,
        "Merged selection into new region"
    );

    Ok(Region::with_offset(canvas, (union.left, union.top)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::split_region;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 7, 255])
        })
    }

    #[test]
    fn test_merge_single_cell() {
        let map = split_region(&Region::new(gradient(900, 900))).unwrap();
        let region = merge_selection(&map, &[4]).unwrap();

        assert_eq!(region.image.dimensions(), (300, 300));
        assert_eq!(region.offset, (300, 300));
    }

    #[test]
    fn test_merge_adjacent_cells() {
        let map = split_region(&Region::new(gradient(900, 900))).unwrap();
        let region = merge_selection(&map, &[4, 5]).unwrap();

        assert_eq!(region.image.dimensions(), (600, 300));
        assert_eq!(region.offset, (300, 300));
    }

    #[test]
    fn test_merge_preserves_pixels() {
        let source = gradient(90, 90);
        let map = split_region(&Region::new(source.clone())).unwrap();
        let region = merge_selection(&map, &[0, 1, 3, 4]).unwrap();

        assert_eq!(region.image.dimensions(), (60, 60));
        for y in 0..60 {
            for x in 0..60 {
                assert_eq!(region.image.get_pixel(x, y), source.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_merge_skips_partially_contained_cells() {
        // A diagonal selection spans a union that contains cells the
        // selection never named; only fully contained cells are
        // pasted, partial overlaps never happen on an aligned grid.
        let source = gradient(90, 90);
        let map = split_region(&Region::new(source.clone())).unwrap();
        let region = merge_selection(&map, &[0, 4]).unwrap();

        assert_eq!(region.image.dimensions(), (60, 60));
        // Cell 1 lies fully inside the union, so its pixels are there
        // too.
        assert_eq!(region.image.get_pixel(45, 15), source.get_pixel(45, 15));
    }

    #[test]
    fn test_merge_out_of_range_index() {
        let map = split_region(&Region::new(gradient(90, 90))).unwrap();
        let err = merge_selection(&map, &[4, 11]).unwrap_err();
        assert!(matches!(err, GridError::MissingSection { index: 11 }));
    }

    #[test]
    fn test_merge_empty_selection() {
        let map = split_region(&Region::new(gradient(90, 90))).unwrap();
        assert!(matches!(
            merge_selection(&map, &[]),
            Err(GridError::EmptySelection)
        ));
    }
}
