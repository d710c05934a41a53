//! Configuration loading from solvekit.toml
//!
//! SolveKit configuration can be specified in a `solvekit.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.
//! Relative directories in a loaded file are resolved against the file's own directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked for during discovery
pub const CONFIG_FILE_NAME: &str = "solvekit.toml";

/// SolveKit configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SolveKitConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for solution execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Directory holding `{Platform}/i_{Name}_{Test}.txt` input files
    #[serde(default = "default_dir")]
    pub inputs_dir: PathBuf,
    /// Show a progress bar while benchmarking
    #[serde(default = "default_progress_bar")]
    pub progress_bar: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            inputs_dir: default_dir(),
            progress_bar: default_progress_bar(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `runtimes_{timestamp}.csv` exports
    #[serde(default = "default_dir")]
    pub export_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export_dir: default_dir(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_progress_bar() -> bool {
    true
}

impl SolveKitConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading configuration");
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable configuration");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Anchor relative directories at `base`
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for dir in [&mut self.runner.inputs_dir, &mut self.output.export_dir] {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
}
