//! The fixed two-round search game.

use image::RgbaImage;
use tracing::{debug, info};

use ispy_grid::{merge_selection, outline_selection, partition, GridStyle, Region};
use ispy_models::extract_cell_indices;
use ispy_vision_client::{Transcript, VisionClient};

use crate::config::RunnerConfig;
use crate::error::RunnerResult;

/// Result of a finished game.
#[derive(Debug)]
pub struct GameOutcome {
    /// Original image with the target region outlined
    pub outlined: RgbaImage,
    /// Section indices of the final selection
    pub selection: Vec<u32>,
}

/// One game of "I spy" against the vision endpoint.
///
/// Round one locates the grid cell(s) containing the target on the
/// full image, round two refines within the merged selection, then
/// the final cells are outlined on the original.
pub struct Game {
    config: RunnerConfig,
    style: GridStyle,
    client: VisionClient,
    transcript: Transcript,
}

impl Game {
    pub fn new(config: RunnerConfig, style: GridStyle, client: VisionClient) -> Self {
        Self {
            config,
            style,
            client,
            transcript: Transcript::new(),
        }
    }

    /// Play the game to completion.
    pub async fn run(&mut self) -> RunnerResult<GameOutcome> {
        info!("Loading source image from {}", self.config.image_path);
        let original = image::open(&self.config.image_path)?.to_rgba8();

        // Round 1: locate the cell(s) containing the target.
        let region = Region::new(original.clone());
        let (map, canvas) = partition(&region, &self.style)?;
        self.save_step(&canvas, 1)?;
        let opening = format!("I spy with my little eye {}", self.config.target_hint);
        let selection = self.ask(&opening, &canvas).await?;

        // Round 2: refine within the merged selection.
        let region = merge_selection(&map, &selection)?;
        let (map, canvas) = partition(&region, &self.style)?;
        self.save_step(&canvas, 2)?;
        let selection = self.ask("In what sections is the object?", &canvas).await?;

        // Outline the answer on the original image.
        let outlined = outline_selection(
            &original,
            &map,
            Some(selection.as_slice()),
            self.config.outline_width,
        )?;
        self.save_step(&outlined, 3)?;

        Ok(GameOutcome {
            outlined,
            selection,
        })
    }

    /// Send one prompt with its canvas and extract the selected
    /// section indices from the reply.
    async fn ask(&mut self, prompt: &str, canvas: &RgbaImage) -> RunnerResult<Vec<u32>> {
        self.transcript.push_user(prompt, Some(canvas))?;
        let reply = self.client.complete(&self.transcript).await?;
        self.transcript.push_reply(&reply);
        debug!(reply = %reply, "Raw inference reply");

        let indices = extract_cell_indices(&reply)?;
        info!(?indices, "Inference selected sections");
        Ok(indices)
    }

    fn save_step(&self, image: &RgbaImage, step: u32) -> RunnerResult<()> {
        if !self.config.save_steps {
            return Ok(());
        }
        let path = self.config.step_path(step);
        image.save(&path)?;
        info!("Saved step {} to {}", step, path.display());
        Ok(())
    }
}
