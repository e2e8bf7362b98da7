//! `quest` terminal client.
//!
//! Reads one command per line from stdin and prints the resulting frame to
//! stdout. Configuration comes from the environment (see [`config::CliConfig`]),
//! optionally seeded from a `.env` file.
//!
//! ```bash
//! QUEST_SEED=42 cargo run -p quest-client
//! ```

mod app;
mod config;
mod input;
mod logging;
mod render;

use anyhow::Result;

use app::CliApp;
use config::CliConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    let log_file = logging::setup_logging(config.session_id())?;

    tracing::info!(?config, log_file = %log_file.display(), "starting client");

    let mut app = CliApp::build(&config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(stdin.lock(), stdout.lock())
}
