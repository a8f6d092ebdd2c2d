//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/doctree/doctree.toml`
//! 3. Explicit config file passed on the command line
//! 4. Environment variables: `DOCTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::{Labels, Language, RenderOptions, RenderStyle, DEFAULT_INDENT_STEP};

/// Per-label overrides on top of the language defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabelOverrides {
    /// Prefix before section titles (default depends on `language`)
    pub section: Option<String>,
    /// Prefix before document titles (default depends on `language`)
    pub document: Option<String>,
}

impl LabelOverrides {
    fn merge(&self, overlay: &LabelOverrides) -> Self {
        Self {
            section: overlay.section.clone().or_else(|| self.section.clone()),
            document: overlay.document.clone().or_else(|| self.document.clone()),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub indent_step: Option<usize>,
    pub language: Option<Language>,
    pub style: Option<RenderStyle>,
    pub labels: LabelOverrides,
}

/// Unified configuration for doctree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces added per nesting level (indent style only)
    pub indent_step: usize,
    /// Label language
    pub language: Language,
    /// Output style
    pub style: RenderStyle,
    /// Label overrides
    pub labels: LabelOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_step: DEFAULT_INDENT_STEP,
            language: Language::default(),
            style: RenderStyle::default(),
            labels: LabelOverrides::default(),
        }
    }
}

/// Get the XDG config directory for doctree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "doctree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("doctree.toml"))
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
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            indent_step: overlay.indent_step.unwrap_or(self.indent_step),
            language: overlay.language.unwrap_or(self.language),
            style: overlay.style.unwrap_or(self.style),
            labels: self.labels.merge(&overlay.labels),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/doctree/doctree.toml` (skipped if missing)
    /// 3. Explicit config file
    /// 4. Environment variables: `DOCTREE_*` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(
            global_config_path().as_deref(),
            config_file,
            Self::env_source(),
        )
    }

    /// Same layering as [`Settings::load`] with every source given explicitly.
    ///
    /// `global_file` is skipped if it does not exist, `config_file` must exist.
    #[instrument(level = "debug", skip(env))]
    pub fn load_from(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_file {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current, env)
    }

    /// `DOCTREE_*` variables of the process environment, `__` nesting keys.
    pub fn env_source() -> Environment {
        Environment::with_prefix("DOCTREE")
            .prefix_separator("_")
            .separator("__")
    }

    /// Apply DOCTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, source: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("indent_step") {
            settings.indent_step = val.parse::<usize>().map_err(|e| ApplicationError::Config {
                message: format!("DOCTREE_INDENT_STEP '{val}': {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("language") {
            settings.language = val
                .parse::<Language>()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("style") {
            settings.style = val
                .parse::<RenderStyle>()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("labels.section") {
            settings.labels.section = Some(val);
        }
        if let Ok(val) = config.get_string("labels.document") {
            settings.labels.document = Some(val);
        }

        Ok(settings)
    }

    /// Labels for the configured language with overrides applied.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::for_language(self.language);
        if let Some(section) = &self.labels.section {
            labels.section = section.clone();
        }
        if let Some(document) = &self.labels.document {
            labels.document = document.clone();
        }
        labels
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent_step: self.indent_step,
            labels: self.labels(),
            style: self.style,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# doctree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/doctree/doctree.toml
#   File:   doctree --config <file>
#   Env:    DOCTREE_* environment variables (e.g. DOCTREE_LABELS__SECTION)

# Spaces added per nesting level (indent style only, tree style has fixed branches)
# indent_step = 2

# Label language: "ru" or "en"
# language = "ru"

# Output style: "indent" or "tree"
# style = "indent"

[labels]
# Prefix before section titles
# section = "Раздел: "

# Prefix before document titles
# document = "Документ: "
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
