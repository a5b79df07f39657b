//! Configuration management.
//!
//! Handles loading and saving configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::project::ProjectType;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// UI/TUI settings
    pub ui: UiConfig,

    /// Inference provider settings
    pub inference: InferenceConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Project type preselected on the wizard's scope step
    pub default_project_type: ProjectType,

    /// Default deliverable asset count for new projects
    pub default_quantity: u32,
}

/// UI/TUI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (built-in: default, dracula, nord)
    pub theme: String,

    /// Custom theme color overrides (hex format: "#RRGGBB")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<CustomColorsConfig>,
}

/// Custom color configuration for theme overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomColorsConfig {
    /// Primary accent color (headers, selected items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Secondary accent color (success, active step)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Main text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Dimmed text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<String>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Error color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Inference provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Provider preference order (gemini, ollama)
    pub providers: Vec<String>,

    /// Model override for the primary provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Ollama-specific settings
    pub ollama: OllamaConfig,
}

/// Ollama configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Ollama server URL
    pub base_url: String,

    /// Model to use
    pub model: String,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.studioplan.toml` in current directory
    /// 2. `~/.config/studioplan/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(".studioplan.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("studioplan").join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save configuration to the global config file.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to_file(&config_dir.join("config.toml"))
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("studioplan"))
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { default_project_type: ProjectType::BrandingIdentity, default_quantity: 10 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: "default".to_string(), custom_colors: None }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            providers: vec!["gemini".to_string(), "ollama".to_string()],
            model: None,
            ollama: OllamaConfig::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:11434".to_string(), model: "llama3.2".to_string() }
    }
}
