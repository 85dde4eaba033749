//! Configuration for the terminal UI.
//!
//! Loaded from an optional TOML file; every field has a default so an
//! empty or missing file yields a playable setup.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Terminal UI configuration.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TuiConfig {
    /// File receiving tracing output (the terminal itself is taken by the UI).
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Capture mouse clicks on cells.
    mouse: bool,

    /// Show the 1-9 digit hint in empty cells.
    show_cell_numbers: bool,

    /// Colours.
    theme: ThemeConfig,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            mouse: true,
            show_cell_numbers: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides.
    pub fn merge_cli(self, cli: &Cli) -> Self {
        let config = match &cli.log_file {
            Some(path) => self.with_log_file(path.clone()),
            None => self,
        };
        if cli.no_mouse {
            config.with_mouse(false)
        } else {
            config
        }
    }
}

/// Colour strings as written in the config file.
///
/// Accepts anything [`Color::from_str`] does: `#rrggbb`, named colours, or
/// an ANSI index.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Winning cells and the O mark.
    accent: String,
    /// Cursor and the X mark.
    primary: String,
    /// Text drawn on top of highlighted cells.
    secondary: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#e91e63".to_string(),
            primary: "#3f51b5".to_string(),
            secondary: "#f5f5f5".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses the colour strings.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            accent: parse_color("accent", &self.accent)?,
            primary: parse_color("primary", &self.primary)?,
            secondary: parse_color("secondary", &self.secondary)?,
            muted: Color::DarkGray,
        })
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid colour for theme.{}: {:?}", field, value)))
}

/// Resolved colours used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Winning cells and the O mark.
    pub accent: Color,
    /// Cursor and the X mark.
    pub primary: Color,
    /// Text drawn on top of highlighted cells.
    pub secondary: Color,
    /// Grid lines, hints and disabled cells.
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0xe9, 0x1e, 0x63),
            primary: Color::Rgb(0x3f, 0x51, 0xb5),
            secondary: Color::Rgb(0xf5, 0xf5, 0xf5),
            muted: Color::DarkGray,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
