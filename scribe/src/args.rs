use std::path::PathBuf;

use clap::Parser;

/// Clinical scribe service
#[derive(Debug, Parser)]
#[command(
    name = "scribe",
    about = "Clinical scribe service: audio transcription, SOAP note extraction, medication templates"
)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "scribe.toml", env = "SCRIBE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SCRIBE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
