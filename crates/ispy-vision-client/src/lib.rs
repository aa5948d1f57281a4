//! Client for the hosted vision inference endpoint.
//!
//! This crate carries the glue between the grid game and a
//! chat-completions style vision API: PNG-to-data-URI encoding, the
//! growing conversation transcript, and the HTTP call that submits
//! the transcript and returns the top reply text.

pub mod client;
pub mod encode;
pub mod error;
pub mod transcript;
pub mod types;

pub use client::{VisionClient, VisionClientConfig};
pub use encode::encode_png_data_uri;
pub use error::{VisionError, VisionResult};
pub use transcript::Transcript;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ContentPart};
