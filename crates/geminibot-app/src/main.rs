use anyhow::Result;
use clap::Parser;
use tracing::error;

use geminibot::{setup_from_cli, Cli};
use geminibot_logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = match setup_from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("CRITICAL: {}", e);
            return Err(e.into());
        }
    };

    geminibot::run(config).await
}
