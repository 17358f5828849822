#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod formulary;
pub mod health;
mod loader;
pub mod notes;
pub mod server;
pub mod stt;

use serde::Deserialize;

pub use cors::*;
pub use formulary::*;
pub use health::*;
pub use notes::*;
pub use server::*;
pub use stt::*;

/// Top-level scribe configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Transcription provider configuration; audio routes mount only when present
    #[serde(default)]
    pub stt: Option<SttConfig>,
    /// Note generation provider configuration; the notes route mounts only when present
    #[serde(default)]
    pub notes: Option<NotesConfig>,
    /// Medication template store configuration
    #[serde(default)]
    pub formulary: FormularyConfig,
}
