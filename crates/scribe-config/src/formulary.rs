use std::path::PathBuf;

use serde::Deserialize;

/// Medication template store configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormularyConfig {
    /// Path of the catalog file; created on first mutation if absent
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for FormularyConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("medication_templates.json")
}
