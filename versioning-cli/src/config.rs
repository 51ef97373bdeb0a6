//! Configuration file loading for the versioning example.
//!
//! Discovers and loads `versioning.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "versioning.toml";

/// Banner title used when neither the config nor the CLI provides one.
pub const DEFAULT_TITLE: &str = "Versioning Example";

/// Top-level configuration from versioning.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// How the report is presented.
    pub display: DisplayConfig,

    /// Where versioning information is read from.
    pub input: InputConfig,
}

/// Display section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print the banner before the report.
    pub banner: bool,

    /// Text between the banner rules.
    pub title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            banner: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Input section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Versioning document to load instead of the compiled-in value.
    /// Relative paths are resolved against the config file's directory.
    pub path: Option<Utf8PathBuf>,
}

/// Discover the versioning.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a versioning.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<VersioningConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<VersioningConfig> {
    let config: VersioningConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<VersioningConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(VersioningConfig::default()),
    }
}

/// Settings after combining the config file with CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    /// Whether to print the banner.
    pub banner: bool,

    /// Banner title.
    pub title: String,

    /// Document to load; `None` selects the compiled-in value.
    pub input: Option<Utf8PathBuf>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: VersioningConfig,
    base_dir: Utf8PathBuf,
}

impl ConfigMerger {
    /// Create a merger; `base_dir` is the directory the config was loaded from.
    pub fn new(config: VersioningConfig, base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
        }
    }

    /// Merge with print command CLI arguments.
    ///
    /// `--input` and `--title` replace the config values; `--no-banner` wins
    /// over `display.banner`.
    pub fn merge_print_args(
        self,
        cli_input: Option<&Utf8Path>,
        no_banner: bool,
        cli_title: Option<&str>,
    ) -> MergedConfig {
        let input = self.resolve_input(cli_input);
        MergedConfig {
            banner: self.config.display.banner && !no_banner,
            title: cli_title
                .map(str::to_string)
                .unwrap_or(self.config.display.title),
            input,
        }
    }

    /// Merge with export command CLI arguments. Export never prints a banner.
    pub fn merge_export_args(self, cli_input: Option<&Utf8Path>) -> MergedConfig {
        let input = self.resolve_input(cli_input);
        MergedConfig {
            banner: false,
            title: self.config.display.title,
            input,
        }
    }

    fn resolve_input(&self, cli_input: Option<&Utf8Path>) -> Option<Utf8PathBuf> {
        match cli_input {
            Some(path) => Some(path.to_path_buf()),
            None => self.config.input.path.as_ref().map(|path| {
                if path.is_absolute() {
                    path.clone()
                } else {
                    self.base_dir.join(path)
                }
            }),
        }
    }
}
