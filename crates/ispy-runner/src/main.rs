//! Quadrant search game binary.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ispy_grid::GridStyle;
use ispy_runner::{Game, RunnerConfig};
use ispy_vision_client::VisionClient;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("ispy_runner=info".parse().unwrap())
        .add_directive("ispy_grid=info".parse().unwrap())
        .add_directive("ispy_vision_client=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting ispy-runner");

    let config = RunnerConfig::from_env();
    info!("Runner config: {:?}", config);

    let mut style = GridStyle::default();
    if let Ok(font_path) = std::env::var("ISPY_FONT") {
        style = style.with_font_path(font_path);
    }

    let client = match VisionClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create vision client: {}", e);
            std::process::exit(1);
        }
    };

    let mut game = Game::new(config, style, client);
    match game.run().await {
        Ok(outcome) => {
            info!("Target outlined in sections {:?}", outcome.selection);
        }
        Err(e) => {
            error!("Game failed: {}", e);
            std::process::exit(1);
        }
    }
}
