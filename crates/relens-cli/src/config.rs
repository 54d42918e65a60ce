use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use relens_diff::DiffConfig;
use relens_fingerprint::WalkPolicy;
use relens_report::HighlightTheme;

/// Default config file looked for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "relens.toml";

/// Full relens configuration: one TOML file drives the capture pipeline, the
/// diff engine, and the highlight renderer.
///
/// Every section has defaults, so an empty file (or none at all) is a valid
/// configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelensConfig {
    /// Capture directory.
    pub root: RootConfig,
    /// Browser-side walk allow-lists.
    pub walk: WalkPolicy,
    /// Diff engine settings.
    pub diff: DiffConfig,
    /// Highlight styles per change category.
    pub highlight: HighlightTheme,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootConfig(pub String);

impl Default for RootConfig {
    fn default() -> Self {
        Self("capture".to_string())
    }
}

impl RelensConfig {
    /// Load from an explicit path; the file must exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load `./relens.toml` if present, defaults otherwise.
    pub fn discover() -> anyhow::Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
