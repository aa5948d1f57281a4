//! Two-round quadrant search game over a vision inference endpoint.

pub mod config;
pub mod error;
pub mod game;

pub use config::RunnerConfig;
pub use error::{RunnerError, RunnerResult};
pub use game::{Game, GameOutcome};
