//! Grid operation error types.

use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Section {index} not found in section map")]
    MissingSection { index: u32 },

    #[error("Selection is empty")]
    EmptySelection,

    #[error("Region too small to partition: {width}x{height}")]
    RegionTooSmall { width: u32, height: u32 },

    #[error("Failed to load label font from {path}: {message}")]
    FontLoad { path: String, message: String },
}

impl GridError {
    pub fn missing_section(index: u32) -> Self {
        Self::MissingSection { index }
    }

    pub fn font_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FontLoad {
            path: path.into(),
            message: message.into(),
        }
    }
}
