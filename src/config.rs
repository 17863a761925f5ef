use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Startup configuration, loaded once from a JSON file and passed by value
/// into the components that need it. Nothing here is global or mutable at
/// runtime.
///
/// Every field has a compiled-in default, so a missing config file (or a
/// file that only overrides one key) always yields a usable setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub directories: Directories,
    /// Theme name resolved through `Theme::from_name`.
    pub theme: String,
    pub menus: Vec<MenuConfig>,
    pub splash: Vec<SplashLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Directories {
    /// Base directory documents are saved to and loaded from by filename.
    pub root: PathBuf,
}

/// One top-level menu with its dropdown entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub title: String,
    pub entries: Vec<MenuEntryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntryConfig {
    pub label: String,
    pub command: MenuCommand,
}

/// Commands a config-defined menu entry can invoke. Extension entries are
/// contributed by the registry at startup, not through the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuCommand {
    Save,
    SaveAs,
    Open,
    Quit,
    About,
}

/// One centered line of the startup splash box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplashLine {
    pub line: u16,
    pub text: String,
}

impl Default for Directories {
    fn default() -> Self {
        let root = dirs::document_dir()
            .map(|d| d.join("wp"))
            .unwrap_or_else(|| PathBuf::from("wp-documents"));
        Self { root }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directories: Directories::default(),
            theme: "wordperfect".to_string(),
            menus: default_menus(),
            splash: default_splash(),
        }
    }
}

fn default_menus() -> Vec<MenuConfig> {
    vec![
        MenuConfig {
            title: "File".to_string(),
            entries: vec![
                MenuEntryConfig {
                    label: "Save".to_string(),
                    command: MenuCommand::Save,
                },
                MenuEntryConfig {
                    label: "Save As...".to_string(),
                    command: MenuCommand::SaveAs,
                },
                MenuEntryConfig {
                    label: "Open...".to_string(),
                    command: MenuCommand::Open,
                },
                MenuEntryConfig {
                    label: "Quit".to_string(),
                    command: MenuCommand::Quit,
                },
            ],
        },
        MenuConfig {
            title: "Help".to_string(),
            entries: vec![MenuEntryConfig {
                label: "About".to_string(),
                command: MenuCommand::About,
            }],
        },
    ]
}

fn default_splash() -> Vec<SplashLine> {
    vec![
        SplashLine {
            line: 3,
            text: "wp".to_string(),
        },
        SplashLine {
            line: 5,
            text: "A WordPerfect-style terminal word processor".to_string(),
        },
        SplashLine {
            line: 7,
            text: "F1 Save   F2 Open   F3 Quit   Esc Menu".to_string(),
        },
    ]
}

impl Config {
    /// Read and parse a config file. A malformed file is an error the
    /// binary reports and exits on; silently falling back to defaults would
    /// hide typos in the user's config.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load from the given path if one was supplied and exists; otherwise
    /// the compiled-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}
