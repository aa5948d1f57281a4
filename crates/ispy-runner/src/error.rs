//! Runner error types.

use thiserror::Error;

pub type RunnerResult<T> = Result<T, RunnerError>;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Grid error: {0}")]
    Grid(#[from] ispy_grid::GridError),

    #[error("Vision error: {0}")]
    Vision(#[from] ispy_vision_client::VisionError),

    #[error("Selection error: {0}")]
    Selection(#[from] ispy_models::SelectionError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
