//! Visual styling for the composed grid canvas.

use image::Rgba;

/// Gap fill between cells on the composed canvas.
pub const GAP_COLOR: Rgba<u8> = Rgba([0, 128, 0, 255]);

/// Border drawn around each cell.
pub const BORDER_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Semi-transparent fill of the burned-in cell label.
pub const LABEL_FILL: Rgba<u8> = Rgba([255, 0, 0, 100]);

/// Outline drawn behind the label for legibility.
pub const LABEL_OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Stroke color for the final outline rectangle.
pub const OUTLINE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Offset of the label outline passes, in pixels.
pub const LABEL_OUTLINE_WIDTH: i32 = 2;

/// Configuration for the composed grid canvas.
///
/// Use the builder pattern for flexible configuration:
/// ```ignore
/// let style = GridStyle::default()
///     .with_gap(12)
///     .with_font_path("fonts/DejaVuSans.ttf");
/// ```
#[derive(Debug, Clone)]
pub struct GridStyle {
    /// Gap between bordered cells (pixels)
    pub gap: u32,
    /// Border around each cell (pixels)
    pub border: u32,
    /// Path to the TrueType font used for cell labels
    pub font_path: String,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            gap: 10,
            border: 5,
            font_path: "./arial.ttf".to_string(),
        }
    }
}

impl GridStyle {
    /// Set the gap between cells.
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the border width around cells.
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Set the label font path.
    pub fn with_font_path(mut self, path: impl Into<String>) -> Self {
        self.font_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults() {
        let style = GridStyle::default();
        assert_eq!(style.gap, 10);
        assert_eq!(style.border, 5);
    }

    #[test]
    fn test_style_builder() {
        let style = GridStyle::default().with_gap(20).with_border(1);
        assert_eq!(style.gap, 20);
        assert_eq!(style.border, 1);
    }
}
