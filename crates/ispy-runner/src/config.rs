//! Runner configuration.

/// Runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path of the source image
    pub image_path: String,
    /// What the player "spies", completing the opening prompt
    pub target_hint: String,
    /// Whether to write the per-round step images
    pub save_steps: bool,
    /// Directory the step images are written to
    pub step_dir: String,
    /// Stroke width of the final outline rectangle
    pub outline_width: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            image_path: "images/ispy.png".to_string(),
            target_hint: "something that is spooky".to_string(),
            save_steps: true,
            step_dir: "images".to_string(),
            outline_width: 5,
        }
    }
}

impl RunnerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            image_path: std::env::var("ISPY_IMAGE")
                .unwrap_or_else(|_| "images/ispy.png".to_string()),
            target_hint: std::env::var("ISPY_TARGET_HINT")
                .unwrap_or_else(|_| "something that is spooky".to_string()),
            save_steps: std::env::var("ISPY_SAVE_STEPS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            step_dir: std::env::var("ISPY_STEP_DIR").unwrap_or_else(|_| "images".to_string()),
            outline_width: std::env::var("ISPY_OUTLINE_WIDTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Path of the step image for a given round.
    pub fn step_path(&self, step: u32) -> std::path::PathBuf {
        std::path::Path::new(&self.step_dir).join(format!("ss{}.png", step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.image_path, "images/ispy.png");
        assert!(config.save_steps);
        assert_eq!(config.outline_width, 5);
    }

    #[test]
    fn test_step_path() {
        let config = RunnerConfig::default();
        assert_eq!(config.step_path(2), std::path::PathBuf::from("images/ss2.png"));
    }
}
