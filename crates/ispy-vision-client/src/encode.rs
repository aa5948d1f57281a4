//! PNG data-URI encoding.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{ImageFormat, RgbaImage};

use crate::error::VisionResult;

/// Encode an image as an embeddable `data:image/png;base64,` URI.
pub fn encode_png_data_uri(image: &RgbaImage) -> VisionResult<String> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(buffer.into_inner())
    ))
}
