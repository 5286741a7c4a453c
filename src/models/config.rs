use crate::assets::AssetLoader;
use crate::rendering::DEFAULT_SWATCH_SIZE;
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Swatch cache directory (emptied at startup)
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Swatch edge length in pixels
    #[serde(default = "default_swatch_size")]
    pub swatch_size: u32,

    /// Launcher keyword; `*` puts the plugin in ambient mode
    #[serde(default = "default_action_keyword")]
    pub action_keyword: String,

    /// Icon for hint and error records
    #[serde(default = "default_icon_path")]
    pub icon_path: PathBuf,

    #[serde(default)]
    pub messages: Messages,
}

/// User-facing strings for informational records.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Messages {
    pub plugin_name: String,
    pub plugin_description: String,
    pub hint_title: String,
    pub hint_subtitle: String,
    pub conversion_error: String,
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache")
}

fn default_swatch_size() -> u32 {
    DEFAULT_SWATCH_SIZE
}

fn default_action_keyword() -> String {
    "cc".to_string()
}

fn default_icon_path() -> PathBuf {
    PathBuf::from("images/app.png")
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            plugin_name: "Colors".to_string(),
            plugin_description: "Convert between hex, rgb, vec3 and hsl color codes".to_string(),
            hint_title: "Enter one or more colors separated by ';'".to_string(),
            hint_subtitle: "Example: 99,197,34;(39,0,152) - select to copy".to_string(),
            conversion_error: "Could not convert the input to a color".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        cache_dir = %config.cache_dir.display(),
                        swatch_size = config.swatch_size,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace the cache directory when an override is given (e.g. `CACHE_DIR`).
    pub fn with_cache_dir_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.cache_dir = dir;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            swatch_size: default_swatch_size(),
            action_keyword: default_action_keyword(),
            icon_path: default_icon_path(),
            messages: Messages::default(),
        }
    }
}
