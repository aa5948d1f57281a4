//! Region partitioning and grid canvas composition.

use ab_glyph::{FontVec, PxScale};
use image::imageops::{crop_imm, overlay, replace};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use ispy_models::PixelBox;
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::section::{Region, Section, SectionMap, GRID_DIM};
use crate::style::{
    GridStyle, BORDER_COLOR, GAP_COLOR, LABEL_FILL, LABEL_OUTLINE, LABEL_OUTLINE_WIDTH,
};

/// Partition a region into a labeled 3x3 grid.
///
/// Returns the section map for coordinate bookkeeping plus the
/// composed canvas that gets shown to the vision model.
pub fn partition(region: &Region, style: &GridStyle) -> GridResult<(SectionMap, RgbaImage)> {
    let map = split_region(region)?;
    let canvas = compose_grid(&map, style)?;
    Ok((map, canvas))
}

/// Slice a region into 9 equal cells in row-major order.
///
/// Cell dimensions are `floor(w / 3)` by `floor(h / 3)`; remainder
/// rows and columns at the right/bottom edge are truncated, not
/// redistributed.
pub fn split_region(region: &Region) -> GridResult<SectionMap> {
    let (width, height) = region.image.dimensions();
    if width < GRID_DIM || height < GRID_DIM {
        return Err(GridError::RegionTooSmall { width, height });
    }

    let cell_w = width / GRID_DIM;
    let cell_h = height / GRID_DIM;
    let (dx, dy) = region.offset;

    let mut map = SectionMap::new();
    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            let local_box = PixelBox::new(
                cell_w * col,
                cell_h * row,
                cell_w * (col + 1),
                cell_h * (row + 1),
            );
            let cropped = crop_imm(&region.image, local_box.left, local_box.top, cell_w, cell_h)
                .to_image();
            let global_box = local_box.translate(dx, dy);

            map.insert(Section {
                index: row * GRID_DIM + col,
                local_box,
                global_box,
                offset: (global_box.left, global_box.top),
                image: cropped,
            });
        }
    }

    debug!(
        cell_w,
        cell_h,
        offset_x = dx,
        offset_y = dy,
        "Split region into {} sections",
        map.len()
    );
    Ok(map)
}

/// Compose the bordered, gap-separated canvas with cell labels 0-8
/// burned in.
pub fn compose_grid(map: &SectionMap, style: &GridStyle) -> GridResult<RgbaImage> {
    let first = map.get(0)?;
    let cell_w = first.local_box.width();
    let cell_h = first.local_box.height();

    let (canvas_w, canvas_h) = grid_canvas_size(cell_w, cell_h, style);
    let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, GAP_COLOR);

    let font = load_font(&style.font_path)?;
    let font_px = (cell_w.min(cell_h) / 2).max(1);
    let scale = PxScale::from(font_px as f32);

    for section in map.sections() {
        let bordered = compose_cell(section, cell_w, cell_h, style, &font, scale);

        let row = section.index / GRID_DIM;
        let col = section.index % GRID_DIM;
        let pos_x = style.gap + (style.border + cell_w + style.gap) * col;
        let pos_y = style.gap + (style.border + cell_h + style.gap) * row;
        overlay(&mut canvas, &bordered, pos_x as i64, pos_y as i64);
    }

    Ok(canvas)
}

/// Size of the composed canvas for the given cell dimensions.
pub fn grid_canvas_size(cell_w: u32, cell_h: u32, style: &GridStyle) -> (u32, u32) {
    (
        (cell_w + style.border * 2) * GRID_DIM + style.gap * GRID_DIM,
        (cell_h + style.border * 2) * GRID_DIM + style.gap * GRID_DIM,
    )
}

/// Border a cell's pixels and burn in its label.
fn compose_cell(
    section: &Section,
    cell_w: u32,
    cell_h: u32,
    style: &GridStyle,
    font: &FontVec,
    scale: PxScale,
) -> RgbaImage {
    let bordered_w = cell_w + style.border * 2;
    let bordered_h = cell_h + style.border * 2;

    let mut bordered = RgbaImage::from_pixel(bordered_w, bordered_h, BORDER_COLOR);
    replace(
        &mut bordered,
        &section.image,
        style.border as i64,
        style.border as i64,
    );

    // Label goes on its own transparent layer so the semi-transparent
    // fill composites over the cell pixels.
    let mut label_layer = RgbaImage::from_pixel(bordered_w, bordered_h, Rgba([255, 255, 255, 0]));
    let label = section.index.to_string();
    let (text_w, _) = text_size(scale, font, &label);
    let text_x = (bordered_w as i32 - text_w as i32) / 2;
    let text_y = (bordered_h as i32 - scale.y as i32) / 2;

    // Outline at the 8 compass offsets, then the fill on top.
    let o = LABEL_OUTLINE_WIDTH;
    for (off_x, off_y) in [
        (-o, -o),
        (-o, o),
        (o, -o),
        (o, o),
        (0, -o),
        (0, o),
        (-o, 0),
        (o, 0),
    ] {
        draw_text_mut(
            &mut label_layer,
            LABEL_OUTLINE,
            text_x + off_x,
            text_y + off_y,
            scale,
            font,
            &label,
        );
    }
    draw_text_mut(&mut label_layer, LABEL_FILL, text_x, text_y, scale, font, &label);

    overlay(&mut bordered, &label_layer, 0, 0);
    bordered
}

fn load_font(path: &str) -> GridResult<FontVec> {
    let bytes =
        std::fs::read(path).map_err(|e| GridError::font_load(path, e.to_string()))?;
    FontVec::try_from_vec(bytes).map_err(|e| GridError::font_load(path, e.to_string()))
}
