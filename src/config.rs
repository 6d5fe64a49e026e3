//! Configuration management for oceans.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{OceansError, Result};
use crate::extrapolation::ExtrapolationOptions;
use crate::interpolation::InterpKind;
use crate::topography::TopoMaskOptions;
use crate::view::ViewOptions;

/// Command-line arguments for oceans
#[derive(Parser, Debug)]
#[command(name = "oceans")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the section JSON file
    pub section_file: PathBuf,

    /// Horizontal resolution of the topography mask, km
    #[arg(long, env = "OCEANS_DX")]
    pub dx: Option<f64>,

    /// Interpolation between stations (linear, nearest, previous, next)
    #[arg(short, long, env = "OCEANS_KIND")]
    pub kind: Option<String>,

    /// Fill the shadow zone before building the view
    #[arg(short, long, env = "OCEANS_FILL")]
    pub fill: bool,

    /// Extrapolation decay factor in [0, 1]
    #[arg(long, env = "OCEANS_DECAY")]
    pub decay: Option<f64>,

    /// Palette used to colour the contour levels
    #[arg(long, env = "OCEANS_COLORMAP")]
    pub colormap: Option<String>,

    /// Spacing of generated contour levels
    #[arg(long, env = "OCEANS_LEVEL_STEP")]
    pub level_step: Option<f64>,

    /// Write the report here instead of stdout
    #[arg(short, long, env = "OCEANS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "OCEANS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "OCEANS_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Report output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Report file (None = stdout)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Indent the JSON report
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Topography mask options
    #[serde(default)]
    pub topography: TopoMaskOptions,

    /// Shadow-zone extrapolation options
    #[serde(default)]
    pub extrapolation: ExtrapolationOptions,

    /// Section view options
    #[serde(default)]
    pub view: ViewOptions,

    /// Report output
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        Self::from_args(Args::parse())
    }

    /// Build the configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(dx) = args.dx {
            config.topography.dx = dx;
        }
        if let Some(kind) = &args.kind {
            config.topography.kind = kind.parse::<InterpKind>().map_err(|e| OceansError::Config {
                message: e.to_string(),
            })?;
        }
        if args.fill {
            config.extrapolation.enabled = true;
        }
        if let Some(decay) = args.decay {
            config.extrapolation.decay = decay;
        }
        if let Some(colormap) = args.colormap {
            config.view.colormap = colormap;
        }
        if let Some(level_step) = args.level_step {
            config.view.level_step = level_step;
        }
        if args.output.is_some() {
            config.output.path = args.output;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok((config, args.section_file))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| OceansError::Config {
            message: format!("Invalid config file {}: {}", path.display(), e),
        })?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.topography = other.topography;
        self.extrapolation = other.extrapolation;
        self.view = other.view;
        if other.output.path.is_some() {
            self.output.path = other.output.path;
        }
        self.output.pretty = other.output.pretty;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(OceansError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        self.topography.validate()?;
        self.extrapolation.validate()?;
        self.view.validate()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topography: TopoMaskOptions::default(),
            extrapolation: ExtrapolationOptions::default(),
            view: ViewOptions::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            pretty: default_pretty(),
        }
    }
}

// Default value functions for serde
fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
