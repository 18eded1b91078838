use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::errors::{TranslatorError, Result};
use crate::translator::TranslationSettings;

/// Translator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// How translations are rendered
    pub display: DisplaySettings,

    /// Which files the `extract` command scans
    pub scan: ScanSettings,
}

/// Rendering flags consumed by the translation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Group translations by category instead of listing them flat
    pub group_by_category: bool,

    /// Prefix category labels with their emoji
    pub show_category_emojis: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            group_by_category: false,
            show_category_emojis: true,
        }
    }
}

impl TranslationSettings for DisplaySettings {
    fn group_by_category(&self) -> bool {
        self.group_by_category
    }

    fn show_category_emojis(&self) -> bool {
        self.show_category_emojis
    }
}

/// File scanning settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Content paths to scan
    pub content: Vec<String>,

    /// Patterns to leave out
    pub exclude: Vec<String>,

    /// Files larger than this many bytes are skipped
    pub max_file_size: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            content: vec![
                "./src/**/*.html".to_string(),
                "./src/**/*.jsx".to_string(),
                "./src/**/*.tsx".to_string(),
                "./src/**/*.vue".to_string(),
                "./src/**/*.svelte".to_string(),
            ],
            exclude: vec!["**/node_modules/**".to_string()],
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

/// Display flags that can be flipped while a translator holding them is in
/// use, e.g. from an editor's settings-changed callback.
#[derive(Debug)]
pub struct SharedSettings {
    group_by_category: AtomicBool,
    show_category_emojis: AtomicBool,
}

impl SharedSettings {
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            group_by_category: AtomicBool::new(settings.group_by_category),
            show_category_emojis: AtomicBool::new(settings.show_category_emojis),
        }
    }

    pub fn set_group_by_category(&self, enabled: bool) {
        self.group_by_category.store(enabled, Ordering::Relaxed);
    }

    pub fn set_show_category_emojis(&self, enabled: bool) {
        self.show_category_emojis.store(enabled, Ordering::Relaxed);
    }

    /// Current values as a plain settings value
    pub fn snapshot(&self) -> DisplaySettings {
        DisplaySettings {
            group_by_category: TranslationSettings::group_by_category(self),
            show_category_emojis: TranslationSettings::show_category_emojis(self),
        }
    }
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

impl TranslationSettings for SharedSettings {
    fn group_by_category(&self) -> bool {
        self.group_by_category.load(Ordering::Relaxed)
    }

    fn show_category_emojis(&self) -> bool {
        self.show_category_emojis.load(Ordering::Relaxed)
    }
}

impl TranslatorConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslatorError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslatorError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&content)
            .map_err(|e| TranslatorError::ConfigError {
                message: format!("Failed to parse JSON config: {}", e),
            })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(TranslatorError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Merge with another configuration; `other` wins on scalar settings
    pub fn merge(mut self, other: Self) -> Self {
        for path in other.scan.content {
            if !self.scan.content.contains(&path) {
                self.scan.content.push(path);
            }
        }
        for pattern in other.scan.exclude {
            if !self.scan.exclude.contains(&pattern) {
                self.scan.exclude.push(pattern);
            }
        }
        self.scan.max_file_size = other.scan.max_file_size;
        self.display = other.display;

        self
    }
}
