//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/areatree/areatree.toml`
//! 3. Local config: `<project_dir>/.areatree.toml`
//! 4. Environment variables: `AREATREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DepthPolicy;

/// Terminal preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Spaces per depth level
    pub indent: usize,
    /// Print the link target after each name
    pub show_urls: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            show_urls: true,
        }
    }
}

/// Markup producer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Url for nodes without one; `{id}` is replaced by the node id
    pub url_template: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            url_template: "/product-areas/{id}".into(),
        }
    }
}

/// Raw preview config for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPreviewConfig {
    pub indent: Option<usize>,
    pub show_urls: Option<bool>,
}

/// Raw markup config for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawMarkupConfig {
    pub url_template: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub malformed_depth: Option<DepthPolicy>,
    pub preview: RawPreviewConfig,
    pub markup: RawMarkupConfig,
}

/// Unified configuration for areatree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Handling of `data-depth` values without a leading integer
    pub malformed_depth: DepthPolicy,
    /// Terminal preview settings
    pub preview: PreviewConfig,
    /// Markup producer settings
    pub markup: MarkupConfig,
}

/// Get the XDG config directory for areatree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "areatree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("areatree.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".areatree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            malformed_depth: overlay.malformed_depth.unwrap_or(self.malformed_depth),
            preview: PreviewConfig {
                indent: overlay.preview.indent.unwrap_or(self.preview.indent),
                show_urls: overlay.preview.show_urls.unwrap_or(self.preview.show_urls),
            },
            markup: MarkupConfig {
                url_template: overlay
                    .markup
                    .url_template
                    .clone()
                    .unwrap_or_else(|| self.markup.url_template.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.areatree.toml`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current, env_source())
    }

    /// Apply AREATREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("malformed_depth") {
            settings.malformed_depth = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("preview.indent") {
            settings.preview.indent = val.trim().parse().map_err(|e| ApplicationError::Config {
                message: format!("AREATREE_PREVIEW__INDENT={val}: {e}"),
            })?;
        }
        if let Ok(val) = config.get_bool("preview.show_urls") {
            settings.preview.show_urls = val;
        }
        if let Ok(val) = config.get_string("markup.url_template") {
            settings.markup.url_template = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# areatree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/areatree/areatree.toml
#   Local:  <project_dir>/.areatree.toml
#   Env:    AREATREE_* environment variables (nested keys use __, e.g. AREATREE_PREVIEW__INDENT)

# What to do with a data-depth that is not an integer: "zero" or "reject"
# malformed_depth = "zero"

[preview]
# Spaces per depth level
# indent = 2

# Print link targets next to names
# show_urls = true

[markup]
# Url for tree nodes without one ({id} is replaced by the node id)
# url_template = "/product-areas/{id}"
"#
        .to_string()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("AREATREE")
        .prefix_separator("_")
        .separator("__")
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
