//! Outlining the final selection on the original image.

use image::RgbaImage;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use tracing::debug;

use crate::error::GridResult;
use crate::section::SectionMap;
use crate::style::OUTLINE_COLOR;

/// Draw a red rectangle around the selected sections on a copy of the
/// original image.
///
/// `indices` of `None` outlines the union of every section. The box
/// is inset by `stroke` so the rectangle draws inward from the
/// section boundary, and the stroke itself also thickens inward.
pub fn outline_selection(
    original: &RgbaImage,
    map: &SectionMap,
    indices: Option<&[u32]>,
    stroke: u32,
) -> GridResult<RgbaImage> {
    let union = map.union_box(indices)?;
    let inward = union.inset(stroke);

    debug!(
        left = inward.left,
        top = inward.top,
        width = inward.width(),
        height = inward.height(),
        stroke,
        "Outlining selection"
    );

    let mut output = original.clone();
    for i in 0..stroke {
        let width = inward.width().saturating_sub(2 * i);
        let height = inward.height().saturating_sub(2 * i);
        if width == 0 || height == 0 {
            break;
        }
        let rect = Rect::at((inward.left + i) as i32, (inward.top + i) as i32)
            .of_size(width, height);
        draw_hollow_rect_mut(&mut output, rect, OUTLINE_COLOR);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::split_region;
    use crate::section::Region;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn white(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, WHITE)
    }

    #[test]
    fn test_outline_no_indices_covers_full_bounds() {
        let source = white(90, 90);
        let map = split_region(&Region::new(source.clone())).unwrap();
        let outlined = outline_selection(&source, &map, None, 5).unwrap();

        // Stroke starts at the inset box corner.
        assert_eq!(*outlined.get_pixel(5, 5), OUTLINE_COLOR);
        assert_eq!(*outlined.get_pixel(9, 9), OUTLINE_COLOR);
        // Outside the inset box: untouched.
        assert_eq!(*outlined.get_pixel(0, 0), WHITE);
        // Interior past the stroke: untouched.
        assert_eq!(*outlined.get_pixel(45, 45), WHITE);
    }

    #[test]
    fn test_outline_selected_cell() {
        let source = white(90, 90);
        let map = split_region(&Region::new(source.clone())).unwrap();
        let outlined = outline_selection(&source, &map, Some(&[4]), 2).unwrap();

        // Cell 4 spans (30,30)..(60,60); inset by 2 puts the stroke at
        // rows/cols 32 and 33.
        assert_eq!(*outlined.get_pixel(32, 32), OUTLINE_COLOR);
        assert_eq!(*outlined.get_pixel(33, 45), OUTLINE_COLOR);
        assert_eq!(*outlined.get_pixel(31, 31), WHITE);
        assert_eq!(*outlined.get_pixel(45, 45), WHITE);
    }

    #[test]
    fn test_outline_does_not_mutate_original() {
        let source = white(90, 90);
        let map = split_region(&Region::new(source.clone())).unwrap();
        let _ = outline_selection(&source, &map, None, 5).unwrap();
        assert_eq!(*source.get_pixel(5, 5), WHITE);
    }

    #[test]
    fn test_outline_out_of_range_index() {
        let source = white(90, 90);
        let map = split_region(&Region::new(source.clone())).unwrap();
        let err = outline_selection(&source, &map, Some(&[9]), 5).unwrap_err();
        assert!(matches!(
            err,
            crate::error::GridError::MissingSection { index: 9 }
        ));
    }
}
